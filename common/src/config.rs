use std::time::Duration;

use glam::{IVec2, ivec2};

use crate::constants::{
    ANIMATION_DELAY, NUM_COLS, NUM_ROWS, ORIGIN_X, ORIGIN_Y, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::error::MazeError;
use crate::maze::{Layout, Maze};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    pub window: IVec2,
    pub origin: IVec2,
    pub rows: usize,
    pub cols: usize,
    pub delay: Duration,
    pub seed: Option<u64>, // None draws a fresh maze every run.
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            window: ivec2(WINDOW_WIDTH, WINDOW_HEIGHT),
            origin: ivec2(ORIGIN_X, ORIGIN_Y),
            rows: NUM_ROWS,
            cols: NUM_COLS,
            delay: ANIMATION_DELAY,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn layout(&self) -> Result<Layout, MazeError> {
        Layout::fit(self.window, self.origin, self.rows, self.cols)
    }

    pub fn build_maze(&self) -> Result<Maze, MazeError> {
        Maze::new(self.rows, self.cols, self.layout()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builds_twenty_by_thirty() {
        let maze = MazeConfig::default().build_maze().unwrap();
        assert_eq!(maze.grid.rows(), 20);
        assert_eq!(maze.grid.cols(), 30);
        assert_eq!(maze.layout.origin, ivec2(5, 5));
    }

    #[test]
    fn test_zero_columns_is_an_error() {
        let config = MazeConfig {
            cols: 0,
            ..Default::default()
        };
        assert_eq!(
            config.build_maze().unwrap_err(),
            MazeError::InvalidDimension { rows: 20, cols: 0 }
        );
    }
}
