//! Scripted random source for tests and demos.

use crate::ports::RandomSource;

/// Replays a fixed list of draws, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedRandomSource {
    draws: Vec<f64>,
    position: usize,
    taken: usize,
}

impl ScriptedRandomSource {
    /// `draws` must not be empty.
    pub fn new(draws: Vec<f64>) -> Self {
        assert!(!draws.is_empty(), "ScriptedRandomSource needs at least one draw");
        Self {
            draws,
            position: 0,
            taken: 0,
        }
    }

    /// Total number of draws handed out so far.
    pub fn taken(&self) -> usize {
        self.taken
    }
}

impl RandomSource for ScriptedRandomSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.draws[self.position];
        self.position = (self.position + 1) % self.draws.len();
        self.taken += 1;
        value
    }
}
