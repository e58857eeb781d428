use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {rows}x{cols}: rows and columns must both be at least 1")]
    InvalidDimension { rows: usize, cols: usize },
}

pub(crate) fn check_dimensions(rows: usize, cols: usize) -> Result<(), MazeError> {
    if rows == 0 || cols == 0 {
        return Err(MazeError::InvalidDimension { rows, cols });
    }
    Ok(())
}
