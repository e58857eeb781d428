use std::collections::VecDeque;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Chooses one of `len` candidates by index. `len` is never zero.
pub trait Picker {
    fn pick(&mut self, len: usize) -> usize;
}

pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// A fixed seed makes the generated maze reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl Picker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Always takes the first candidate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstPicker;

impl Picker for FirstPicker {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

/// Replays a fixed sequence of choices, then falls back to the first
/// candidate. Indices past the end of the candidate list are clamped.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPicker {
    choices: VecDeque<usize>,
}

impl ScriptedPicker {
    pub fn new<I>(choices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            choices: choices.into_iter().collect(),
        }
    }
}

impl Picker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.choices.pop_front().unwrap_or(0).min(len - 1)
    }
}
