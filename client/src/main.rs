use std::process;

use log::error;
use macroquad::window::Conf;

use common::MazeConfig;
use common::constants::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = client::run(MazeConfig::default()).await {
        error!("{}", e);
        process::exit(1);
    }
}
