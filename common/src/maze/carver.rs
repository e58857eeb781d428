use log::trace;

use super::grid::{Direction, Grid, Position};
use super::picker::Picker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarveEvent {
    /// The wall pair between `from` and `to` was broken and `to` is now the
    /// cell being carved.
    Opened { from: Position, to: Position },
    /// No unvisited neighbor is left: the cell is final and should be drawn.
    Sealed(Position),
}

impl CarveEvent {
    /// Whether the event is followed by an animation tick.
    pub fn is_tick(&self) -> bool {
        matches!(self, CarveEvent::Sealed(_))
    }
}

/// Randomized depth-first backtracker driven one event at a time.
///
/// The stack holds the chain of cells from the root to the cell currently
/// being carved. Each step re-enumerates the unvisited neighbors of the top
/// cell, since carving deeper may have consumed some of them.
pub struct Carver {
    root: Option<Position>,
    stack: Vec<Position>,
}

impl Carver {
    pub fn new(root: Position) -> Self {
        Self {
            root: Some(root),
            stack: Vec::new(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.root.is_none() && self.stack.is_empty()
    }

    pub fn step(&mut self, grid: &mut Grid, picker: &mut dyn Picker) -> Option<CarveEvent> {
        if let Some(root) = self.root.take() {
            grid.mark_visited(root);
            self.stack.push(root);
        }

        let curr = *self.stack.last()?;

        let candidates: Vec<Direction> = grid
            .neighbors(curr)
            .filter(|&(_, neighbor)| !grid.is_visited(neighbor))
            .map(|(direction, _)| direction)
            .collect();

        if candidates.is_empty() {
            self.stack.pop();
            trace!("sealed {:?}", curr);
            return Some(CarveEvent::Sealed(curr));
        }

        let direction = candidates[picker.pick(candidates.len())];
        let next = grid
            .break_wall(curr, direction)
            .expect("candidate directions always point inside the grid");
        grid.mark_visited(next);
        self.stack.push(next);
        trace!("opened {:?} -> {:?}", curr, next);

        Some(CarveEvent::Opened {
            from: curr,
            to: next,
        })
    }
}
