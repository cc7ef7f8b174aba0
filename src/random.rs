use std::collections::VecDeque;

use rand::Rng;

/// Source of uniform choices, passed explicitly into every operation that
/// needs randomness.
pub trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform pick from a non-empty slice.
    fn choose<'a, T>(&mut self, candidates: &'a [T]) -> &'a T {
        assert!(!candidates.is_empty(), "cannot choose from an empty set");

        &candidates[self.pick(candidates.len())]
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Replays a fixed sequence of picks, for deterministic tests and replays.
///
/// Each scripted value is reduced modulo the requested length. Once the
/// script runs out every pick returns 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new<I: IntoIterator<Item = usize>>(picks: I) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }
}
