use glam::IVec2;
use strum::{Display, IntoStaticStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub start: IVec2,
    pub end: IVec2,
}

impl Segment {
    pub fn new(start: IVec2, end: IVec2) -> Self {
        Self { start, end }
    }
}

/// Colour tokens understood by every surface. The string form is the name
/// a canvas would accept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum Color {
    #[strum(serialize = "black")]
    Wall,
    #[strum(serialize = "#d9d9d9")]
    Background,
    #[strum(serialize = "red")]
    Path,
    #[strum(serialize = "gray")]
    Undo,
}

/// Where the maze gets drawn.
pub trait Surface {
    fn draw_segment(&mut self, segment: Segment, color: Color);
}

/// Keeps every segment in draw order. Useful headless and in tests.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub strokes: Vec<(Segment, Color)>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, color: Color) -> usize {
        self.strokes.iter().filter(|(_, c)| *c == color).count()
    }
}

impl Surface for Recorder {
    fn draw_segment(&mut self, segment: Segment, color: Color) {
        self.strokes.push((segment, color));
    }
}
