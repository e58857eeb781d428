use glam::{IVec2, ivec2};

use super::grid::Position;
use crate::error::{MazeError, check_dimensions};

/// Screen-space bounding box of one cell, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBox {
    pub min: IVec2, // Top-left corner.
    pub max: IVec2, // Bottom-right corner.
}

impl CellBox {
    pub fn center(&self) -> IVec2 {
        (self.min + self.max) / 2
    }
}

/// Maps grid positions to pixels. Cells are laid out edge to edge starting
/// at `origin`, so neighboring boxes share their common side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub origin: IVec2,
    pub cell_size: IVec2,
}

impl Layout {
    pub fn new(origin: IVec2, cell_size: IVec2) -> Self {
        Self { origin, cell_size }
    }

    /// Largest whole-pixel cell size that fits `rows` x `cols` cells between
    /// `origin` and the far edges of `window`.
    pub fn fit(window: IVec2, origin: IVec2, rows: usize, cols: usize) -> Result<Self, MazeError> {
        check_dimensions(rows, cols)?;

        let available = window - origin;
        let cell_size = ivec2(available.x / cols as i32, available.y / rows as i32);
        Ok(Self::new(origin, cell_size))
    }

    pub fn cell_box(&self, position: Position) -> CellBox {
        let min = self.origin + ivec2(position.col as i32, position.row as i32) * self.cell_size;
        CellBox {
            min,
            max: min + self.cell_size,
        }
    }

    pub fn center(&self, position: Position) -> IVec2 {
        self.cell_box(position).center()
    }
}
