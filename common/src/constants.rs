use std::time::Duration;

// Window:
pub const WINDOW_TITLE: &str = "Maze Solver";
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;

// Grid:
pub const NUM_ROWS: usize = 20;
pub const NUM_COLS: usize = 30;
pub const ORIGIN_X: i32 = 5; // Offset of the top-left corner of cell (0, 0) from the window corner.
pub const ORIGIN_Y: i32 = 5;

// Drawing:
pub const LINE_THICKNESS: f32 = 2.0;
pub const ANIMATION_DELAY: Duration = Duration::from_millis(50); // One tick per finalized cell or solver step.
