//! Static Branch Predictor.
//!
//! Implements an "Always Taken" prediction policy. It owns no tables and
//! ignores training entirely.

use super::BranchPredictor;

/// Static Branch Predictor structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticPredictor;

impl StaticPredictor {
    /// Creates a new Static Predictor.
    pub const fn new() -> Self {
        Self
    }
}

impl BranchPredictor for StaticPredictor {
    /// Always predicts taken.
    #[inline(always)]
    fn predict(&self, _pc: u32) -> bool {
        true
    }

    /// Does nothing; there is no state to train.
    #[inline(always)]
    fn train(&mut self, _pc: u32, _taken: bool) {}
}
