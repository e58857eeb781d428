use strum::{EnumIter, IntoEnumIterator};

use crate::error::{MazeError, check_dimensions};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The four axis-aligned directions. Iteration order (up, down, left, right)
/// is the order in which both traversals enumerate neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Row and column deltas.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Walls {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for Walls {
    fn default() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }
}

impl Walls {
    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn clear(&mut self, direction: Direction) {
        let side = match direction {
            Direction::Up => &mut self.top,
            Direction::Down => &mut self.bottom,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        *side = false;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub walls: Walls,
    pub visited: bool,
}

impl Cell {
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.has(direction)
    }
}

/// Row-major table of cells. Walls are only ever removed in mirrored pairs,
/// except for the entrance and exit on the outer boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        check_dimensions(rows, cols)?;

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Position {
        Position::ORIGIN
    }

    pub fn end(&self) -> Position {
        Position::new(self.rows - 1, self.cols - 1)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    fn index(&self, position: Position) -> usize {
        debug_assert!(
            self.contains(position),
            "position {:?} is out of bounds",
            position
        );

        position.row * self.cols + position.col
    }

    pub fn cell(&self, position: Position) -> &Cell {
        &self.cells[self.index(position)]
    }

    fn cell_mut(&mut self, position: Position) -> &mut Cell {
        let i = self.index(position);
        &mut self.cells[i]
    }

    pub fn is_visited(&self, position: Position) -> bool {
        self.cell(position).visited
    }

    pub fn mark_visited(&mut self, position: Position) {
        self.cell_mut(position).visited = true;
    }

    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let (d_row, d_col) = direction.offset();
        let row = position.row.checked_add_signed(d_row)?;
        let col = position.col.checked_add_signed(d_col)?;
        let neighbor = Position::new(row, col);

        self.contains(neighbor).then_some(neighbor)
    }

    /// In-bounds neighbors in direction order.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::iter()
            .filter_map(move |direction| Some((direction, self.neighbor(position, direction)?)))
    }

    pub fn is_open(&self, position: Position, direction: Direction) -> bool {
        !self.cell(position).has_wall(direction)
    }

    /// Removes the wall on `direction` side of `position` together with the
    /// facing wall of the neighbor. Returns the neighbor, or `None` without
    /// touching anything if `direction` points off the grid.
    pub fn break_wall(&mut self, position: Position, direction: Direction) -> Option<Position> {
        let neighbor = self.neighbor(position, direction)?;
        self.cell_mut(position).walls.clear(direction);
        self.cell_mut(neighbor).walls.clear(direction.opposite());
        Some(neighbor)
    }

    pub fn open_entrance_and_exit(&mut self) {
        let start = self.start();
        let end = self.end();
        self.cell_mut(start).walls.clear(Direction::Up);
        self.cell_mut(end).walls.clear(Direction::Down);
    }

    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Number of interior wall pairs that have been broken.
    pub fn open_passages(&self) -> usize {
        self.positions()
            .map(|position| {
                [Direction::Down, Direction::Right]
                    .into_iter()
                    .filter(|&direction| {
                        self.neighbor(position, direction).is_some()
                            && self.is_open(position, direction)
                    })
                    .count()
            })
            .sum()
    }
}
