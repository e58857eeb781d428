pub mod carver;
pub mod grid;
pub mod layout;
pub mod picker;
pub mod solver;

use std::fmt;

use glam::ivec2;
use log::debug;

pub use carver::{CarveEvent, Carver};
pub use grid::{Cell, Direction, Grid, Position, Walls};
pub use layout::{CellBox, Layout};
pub use picker::{FirstPicker, Picker, RandomPicker, ScriptedPicker};
pub use solver::{SolveEvent, SolveOutcome, Solver};

use crate::error::MazeError;
use crate::surface::{Color, Segment, Surface};

/// A grid together with where it sits on screen.
///
/// The blocking `generate` and `solve` run a traversal to completion, calling
/// `pace` after each drawn tick. Drivers that need to yield between ticks
/// (a frame loop, for instance) call `advance_carve` and `advance_solve`
/// instead, which draw exactly what the blocking versions would.
#[derive(Clone)]
pub struct Maze {
    pub grid: Grid,
    pub layout: Layout,
}

impl Maze {
    /// Builds a fully walled grid with the entrance (top of the first cell)
    /// and exit (bottom of the last cell) already open.
    pub fn new(rows: usize, cols: usize, layout: Layout) -> Result<Self, MazeError> {
        let mut grid = Grid::new(rows, cols)?;
        grid.open_entrance_and_exit();
        Ok(Self { grid, layout })
    }

    pub fn carver(&self) -> Carver {
        Carver::new(self.grid.start())
    }

    pub fn solver(&self) -> Solver {
        Solver::new(self.grid.start(), self.grid.end())
    }

    pub fn advance_carve(
        &mut self,
        carver: &mut Carver,
        picker: &mut dyn Picker,
        surface: &mut dyn Surface,
    ) -> Option<CarveEvent> {
        let event = carver.step(&mut self.grid, picker)?;
        if let CarveEvent::Sealed(position) = event {
            self.draw_cell(position, surface);
        }
        Some(event)
    }

    pub fn advance_solve(
        &mut self,
        solver: &mut Solver,
        surface: &mut dyn Surface,
    ) -> Option<SolveEvent> {
        let event = solver.step(&mut self.grid)?;
        match event {
            SolveEvent::Advanced { from, to } => self.draw_move(from, to, false, surface),
            SolveEvent::Retreated { from, to } => self.draw_move(from, to, true, surface),
            SolveEvent::Entered(_) | SolveEvent::DeadEnd(_) => {}
        }
        Some(event)
    }

    /// Carves the whole maze, then clears the visited flags for the solver.
    pub fn generate(
        &mut self,
        picker: &mut dyn Picker,
        surface: &mut dyn Surface,
        mut pace: impl FnMut(),
    ) {
        let mut carver = self.carver();
        while let Some(event) = self.advance_carve(&mut carver, picker, surface) {
            if event.is_tick() {
                pace();
            }
        }
        self.finish_carving();
    }

    /// Must run once between carving and solving: the solver relies on
    /// every cell starting unvisited.
    pub fn finish_carving(&mut self) {
        self.grid.reset_visited();

        debug!(
            "generated {}x{} maze with {} passages:\n{}",
            self.grid.rows(),
            self.grid.cols(),
            self.grid.open_passages(),
            self.log()
        );
    }

    pub fn solve(&mut self, surface: &mut dyn Surface, mut pace: impl FnMut()) -> SolveOutcome {
        let mut solver = self.solver();
        let mut entered = 0;
        while let Some(event) = self.advance_solve(&mut solver, surface) {
            if event.is_tick() {
                entered += 1;
                pace();
            }
        }

        let outcome = solver.outcome().unwrap_or(SolveOutcome::Unsolvable);
        debug!("solver finished: {:?} after entering {} cells", outcome, entered);
        outcome
    }

    /// Draws the four sides of a cell: walls in the wall colour, openings in
    /// the background colour.
    pub fn draw_cell(&self, position: Position, surface: &mut dyn Surface) {
        let CellBox { min, max } = self.layout.cell_box(position);
        let cell = self.grid.cell(position);

        let sides = [
            (Direction::Left, Segment::new(min, ivec2(min.x, max.y))),
            (Direction::Right, Segment::new(ivec2(max.x, min.y), max)),
            (Direction::Up, Segment::new(min, ivec2(max.x, min.y))),
            (Direction::Down, Segment::new(ivec2(min.x, max.y), max)),
        ];

        for (direction, segment) in sides {
            let color = if cell.has_wall(direction) {
                Color::Wall
            } else {
                Color::Background
            };
            surface.draw_segment(segment, color);
        }
    }

    pub fn draw_move(&self, from: Position, to: Position, undo: bool, surface: &mut dyn Surface) {
        let segment = Segment::new(self.layout.center(from), self.layout.center(to));
        let color = if undo { Color::Undo } else { Color::Path };
        surface.draw_segment(segment, color);
    }

    pub fn log(&self) -> String {
        let rows = self.grid.rows();
        let cols = self.grid.cols();
        let mut lines = Vec::with_capacity(2 * rows + 1);

        for row in 0..rows {
            let mut top = String::new();
            let mut body = String::new();

            for col in 0..cols {
                let walls = self.grid.cell(Position::new(row, col)).walls;
                top.push('+');
                top.push_str(if walls.top { "--" } else { "  " });
                body.push(if walls.left { '|' } else { ' ' });
                body.push_str("  ");
            }

            top.push('+');
            let last = self.grid.cell(Position::new(row, cols - 1)).walls;
            body.push(if last.right { '|' } else { ' ' });

            lines.push(top);
            lines.push(body);
        }

        let mut bottom = String::new();
        for col in 0..cols {
            let walls = self.grid.cell(Position::new(rows - 1, col)).walls;
            bottom.push('+');
            bottom.push_str(if walls.bottom { "--" } else { "  " });
        }
        bottom.push('+');
        lines.push(bottom);

        lines.join("\n")
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use super::*;
    use crate::surface::Recorder;

    fn small_maze(rows: usize, cols: usize) -> Maze {
        Maze::new(rows, cols, Layout::new(IVec2::ZERO, ivec2(10, 10))).unwrap()
    }

    #[test]
    fn test_new_opens_entrance_and_exit() {
        let maze = small_maze(3, 4);
        assert!(maze.grid.is_open(Position::new(0, 0), Direction::Up));
        assert!(maze.grid.is_open(Position::new(2, 3), Direction::Down));
        assert_eq!(maze.grid.open_passages(), 0);
    }

    #[test]
    fn test_new_rejects_zero_rows() {
        let result = Maze::new(0, 3, Layout::new(IVec2::ZERO, ivec2(10, 10)));
        assert!(matches!(
            result,
            Err(MazeError::InvalidDimension { rows: 0, cols: 3 })
        ));
    }

    #[test]
    fn test_draw_cell_paints_openings_in_background() {
        let maze = small_maze(1, 1);
        let mut recorder = Recorder::new();
        maze.draw_cell(Position::ORIGIN, &mut recorder);

        assert_eq!(
            recorder.strokes,
            vec![
                (Segment::new(ivec2(0, 0), ivec2(0, 10)), Color::Wall),
                (Segment::new(ivec2(10, 0), ivec2(10, 10)), Color::Wall),
                (Segment::new(ivec2(0, 0), ivec2(10, 0)), Color::Background),
                (Segment::new(ivec2(0, 10), ivec2(10, 10)), Color::Background),
            ]
        );
    }

    #[test]
    fn test_draw_move_joins_centers() {
        let maze = small_maze(2, 2);
        let mut recorder = Recorder::new();
        maze.draw_move(Position::new(0, 0), Position::new(0, 1), false, &mut recorder);
        maze.draw_move(Position::new(0, 0), Position::new(0, 1), true, &mut recorder);

        let segment = Segment::new(ivec2(5, 5), ivec2(15, 5));
        assert_eq!(
            recorder.strokes,
            vec![(segment, Color::Path), (segment, Color::Undo)]
        );
    }

    #[test]
    fn test_generate_two_by_two_with_first_choice() {
        let mut maze = small_maze(2, 2);
        let mut recorder = Recorder::new();
        let mut ticks = 0;
        maze.generate(&mut FirstPicker, &mut recorder, || ticks += 1);

        assert_eq!(ticks, 4);
        assert_eq!(recorder.strokes.len(), 16);
        assert!(maze.grid.positions().all(|p| !maze.grid.is_visited(p)));
        assert_eq!(
            maze.log(),
            ["+  +--+", "|  |  |", "+  +  +", "|     |", "+--+  +"].join("\n")
        );
    }

    #[test]
    fn test_solve_two_by_two_draws_path_only() {
        let mut maze = small_maze(2, 2);
        maze.generate(&mut FirstPicker, &mut Recorder::new(), || {});

        let mut recorder = Recorder::new();
        let mut ticks = 0;
        let outcome = maze.solve(&mut recorder, || ticks += 1);

        assert_eq!(outcome, SolveOutcome::Solved);
        assert_eq!(ticks, 3);
        assert_eq!(recorder.count(Color::Path), 2);
        assert_eq!(recorder.count(Color::Undo), 0);
    }

    #[test]
    fn test_single_cell_maze() {
        let mut maze = small_maze(1, 1);
        maze.generate(&mut FirstPicker, &mut Recorder::new(), || {});

        let mut recorder = Recorder::new();
        assert!(maze.solve(&mut recorder, || {}).is_solved());
        assert!(recorder.strokes.is_empty());
        assert_eq!(maze.log(), ["+  +", "|  |", "+  +"].join("\n"));
    }
}
