//! Branch Predictor Interface.
//!
//! This module defines the `BranchPredictor` trait that all direction predictors
//! implement. The driver calls [`BranchPredictor::predict`] once per conditional branch,
//! resolves the branch, and then calls [`BranchPredictor::train`] with the true outcome.

/// Trait for conditional branch direction predictors.
pub trait BranchPredictor {
    /// Predicts whether the branch at `pc` will be taken.
    ///
    /// This is a pure read of predictor state.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the branch instruction
    fn predict(&self, pc: u32) -> bool;

    /// Trains the predictor with the resolved outcome of the branch at `pc`.
    ///
    /// Must follow the [`predict`](BranchPredictor::predict) call for the same branch and
    /// precede the prediction of the next one.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the branch instruction
    /// * `taken` - Whether the branch was actually taken
    fn train(&mut self, pc: u32, taken: bool);
}
