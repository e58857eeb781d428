use log::{debug, info, warn};
use macroquad::prelude::prevent_quit;

use common::maze::{RandomPicker, SolveOutcome};
use common::{MazeConfig, MazeError};

use crate::canvas::Canvas;

/// Generates, solves, then idles until the window is closed. Closing the
/// window at any point ends the run early; that is not an error.
pub async fn run(config: MazeConfig) -> Result<(), MazeError> {
    prevent_quit();

    let mut maze = config.build_maze()?;
    let mut canvas = Canvas::new();
    let mut picker = RandomPicker::new(config.seed);

    info!(
        "generating {}x{} maze with cells of {}x{} px",
        config.rows, config.cols, maze.layout.cell_size.x, maze.layout.cell_size.y
    );

    let mut carver = maze.carver();
    while let Some(event) = maze.advance_carve(&mut carver, &mut picker, &mut canvas) {
        if event.is_tick() && canvas.pump(config.delay).await.is_break() {
            info!("window closed during generation");
            return Ok(());
        }
    }
    maze.finish_carving();

    info!("solving");
    let mut solver = maze.solver();
    while let Some(event) = maze.advance_solve(&mut solver, &mut canvas) {
        if event.is_tick() && canvas.pump(config.delay).await.is_break() {
            info!("window closed while solving");
            return Ok(());
        }
    }

    let (start, end) = (maze.grid.start(), maze.grid.end());
    match solver.outcome() {
        Some(SolveOutcome::Solved) => info!("found a path from {:?} to {:?}", start, end),
        _ => warn!("no path from {:?} to {:?}", start, end),
    }
    debug!("{} segments drawn", canvas.len());

    canvas.run_until_closed().await;
    info!("window closed");
    Ok(())
}
