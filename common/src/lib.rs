pub mod config;
pub mod constants;
pub mod error;
pub mod maze;
pub mod surface;

pub use config::MazeConfig;
pub use error::MazeError;
pub use maze::Maze;
