use std::ops::ControlFlow;
use std::time::Duration;

use macroquad::prelude as mq;

use common::constants::LINE_THICKNESS;
use common::surface::{Color, Segment, Surface};

/// Everything drawn so far, in order. Macroquad clears the screen every
/// frame, so the whole list is replayed by `present`; later strokes paint
/// over earlier ones just as they would on a persistent canvas.
#[derive(Default)]
pub struct Canvas {
    strokes: Vec<(Segment, Color)>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn present(&self) {
        mq::clear_background(to_macroquad(Color::Background));

        for (segment, color) in &self.strokes {
            let start = segment.start.as_vec2();
            let end = segment.end.as_vec2();
            mq::draw_line(
                start.x,
                start.y,
                end.x,
                end.y,
                LINE_THICKNESS,
                to_macroquad(*color),
            );
        }
    }

    /// Keeps presenting frames until `delay` has passed. Breaks as soon as
    /// the user asks to close the window.
    pub async fn pump(&self, delay: Duration) -> ControlFlow<()> {
        let started = mq::get_time();

        loop {
            if close_requested() {
                return ControlFlow::Break(());
            }

            self.present();
            mq::next_frame().await;

            if mq::get_time() - started >= delay.as_secs_f64() {
                return ControlFlow::Continue(());
            }
        }
    }

    pub async fn run_until_closed(&self) {
        while !close_requested() {
            self.present();
            mq::next_frame().await;
        }
    }
}

impl Surface for Canvas {
    fn draw_segment(&mut self, segment: Segment, color: Color) {
        self.strokes.push((segment, color));
    }
}

fn close_requested() -> bool {
    mq::is_quit_requested() || mq::is_key_pressed(mq::KeyCode::Escape)
}

fn to_macroquad(color: Color) -> mq::Color {
    match color {
        Color::Wall => mq::BLACK,
        Color::Background => mq::Color::from_rgba(0xd9, 0xd9, 0xd9, 0xff),
        Color::Path => mq::RED,
        Color::Undo => mq::GRAY,
    }
}
