use log::trace;
use strum::IntoEnumIterator;

use super::grid::{Direction, DirectionIter, Grid, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveEvent {
    /// The search stepped onto a cell and marked it visited.
    Entered(Position),
    /// A forward move from `from` into `to` is about to be explored.
    Advanced { from: Position, to: Position },
    /// Every direction out of the cell failed.
    DeadEnd(Position),
    /// The move from `from` into `to` led nowhere and is undone.
    Retreated { from: Position, to: Position },
}

impl SolveEvent {
    pub fn is_tick(&self) -> bool {
        matches!(self, SolveEvent::Entered(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved,
    Unsolvable,
}

impl SolveOutcome {
    pub fn is_solved(self) -> bool {
        self == SolveOutcome::Solved
    }
}

struct Frame {
    position: Position,
    directions: DirectionIter, // Directions not tried yet.
    trying: Option<Position>,  // Child whose subtree is being searched.
}

impl Frame {
    fn new(position: Position) -> Self {
        Self {
            position,
            directions: Direction::iter(),
            trying: None,
        }
    }
}

/// Wall-respecting depth-first search driven one event at a time.
///
/// Visited flags are never cleared when a branch is undone, so each cell is
/// entered at most once and the search ends after at most `rows * cols`
/// entries.
pub struct Solver {
    target: Position,
    pending: Option<Position>,
    stack: Vec<Frame>,
    outcome: Option<SolveOutcome>,
}

impl Solver {
    pub fn new(start: Position, target: Position) -> Self {
        Self {
            target,
            pending: Some(start),
            stack: Vec::new(),
            outcome: None,
        }
    }

    pub fn outcome(&self) -> Option<SolveOutcome> {
        self.outcome
    }

    pub fn step(&mut self, grid: &mut Grid) -> Option<SolveEvent> {
        if self.outcome.is_some() {
            return None;
        }

        if let Some(position) = self.pending.take() {
            grid.mark_visited(position);
            if position == self.target {
                self.stack.clear();
                self.outcome = Some(SolveOutcome::Solved);
            } else {
                self.stack.push(Frame::new(position));
            }
            trace!("entered {:?}", position);
            return Some(SolveEvent::Entered(position));
        }

        let frame = self.stack.last_mut()?;
        let from = frame.position;

        // Reaching here with a child still recorded means its search failed.
        if let Some(to) = frame.trying.take() {
            return Some(SolveEvent::Retreated { from, to });
        }

        for direction in frame.directions.by_ref() {
            let Some(next) = grid.neighbor(from, direction) else {
                continue;
            };
            if grid.is_visited(next) || !grid.is_open(from, direction) {
                continue;
            }

            frame.trying = Some(next);
            self.pending = Some(next);
            return Some(SolveEvent::Advanced { from, to: next });
        }

        self.stack.pop();
        if self.stack.is_empty() {
            self.outcome = Some(SolveOutcome::Unsolvable);
        }
        trace!("dead end at {:?}", from);
        Some(SolveEvent::DeadEnd(from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(grid: &mut Grid) -> (Vec<SolveEvent>, SolveOutcome) {
        let mut solver = Solver::new(grid.start(), grid.end());
        let mut events = Vec::new();
        while let Some(event) = solver.step(grid) {
            events.push(event);
        }
        (events, solver.outcome().unwrap())
    }

    #[test]
    fn test_single_cell_is_solved_without_moves() {
        let mut grid = Grid::new(1, 1).unwrap();
        let (events, outcome) = run(&mut grid);

        assert_eq!(events, vec![SolveEvent::Entered(Position::ORIGIN)]);
        assert_eq!(outcome, SolveOutcome::Solved);
    }

    #[test]
    fn test_straight_corridor() {
        let mut grid = Grid::new(1, 3).unwrap();
        grid.break_wall(Position::new(0, 0), Direction::Right);
        grid.break_wall(Position::new(0, 1), Direction::Right);

        let p = Position::new;
        let (events, outcome) = run(&mut grid);
        assert_eq!(
            events,
            vec![
                SolveEvent::Entered(p(0, 0)),
                SolveEvent::Advanced {
                    from: p(0, 0),
                    to: p(0, 1)
                },
                SolveEvent::Entered(p(0, 1)),
                SolveEvent::Advanced {
                    from: p(0, 1),
                    to: p(0, 2)
                },
                SolveEvent::Entered(p(0, 2)),
            ]
        );
        assert!(outcome.is_solved());
    }

    #[test]
    fn test_dead_end_is_undone_before_next_direction() {
        // (0,0) opens down into a dead end at (1,0) and right towards the exit.
        let mut grid = Grid::new(2, 2).unwrap();
        grid.break_wall(Position::new(0, 0), Direction::Down);
        grid.break_wall(Position::new(0, 0), Direction::Right);
        grid.break_wall(Position::new(0, 1), Direction::Down);

        let p = Position::new;
        let (events, outcome) = run(&mut grid);
        assert_eq!(
            events,
            vec![
                SolveEvent::Entered(p(0, 0)),
                SolveEvent::Advanced {
                    from: p(0, 0),
                    to: p(1, 0)
                },
                SolveEvent::Entered(p(1, 0)),
                SolveEvent::DeadEnd(p(1, 0)),
                SolveEvent::Retreated {
                    from: p(0, 0),
                    to: p(1, 0)
                },
                SolveEvent::Advanced {
                    from: p(0, 0),
                    to: p(0, 1)
                },
                SolveEvent::Entered(p(0, 1)),
                SolveEvent::Advanced {
                    from: p(0, 1),
                    to: p(1, 1)
                },
                SolveEvent::Entered(p(1, 1)),
            ]
        );
        assert_eq!(outcome, SolveOutcome::Solved);
        assert!(grid.is_visited(p(1, 0)), "undone cells stay visited");
    }

    #[test]
    fn test_walled_off_target_is_unsolvable() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.break_wall(Position::new(0, 0), Direction::Right);

        let mut solver = Solver::new(grid.start(), grid.end());
        let mut entered = 0;
        while let Some(event) = solver.step(&mut grid) {
            if event.is_tick() {
                entered += 1;
            }
        }

        assert_eq!(entered, 2);
        assert_eq!(solver.outcome(), Some(SolveOutcome::Unsolvable));
        assert_eq!(solver.step(&mut grid), None);
    }

    #[test]
    fn test_closed_walls_are_not_crossed() {
        let mut grid = Grid::new(2, 2).unwrap();
        let (events, outcome) = run(&mut grid);

        assert_eq!(
            events,
            vec![
                SolveEvent::Entered(Position::ORIGIN),
                SolveEvent::DeadEnd(Position::ORIGIN),
            ]
        );
        assert_eq!(outcome, SolveOutcome::Unsolvable);
    }
}
