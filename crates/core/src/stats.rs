//! Prediction statistics collection and reporting.
//!
//! This module tracks how well a predictor does over a trace. It provides:
//! 1. **Counts:** Branches seen, branches actually taken, and mispredictions.
//! 2. **Derived metrics:** Misprediction rate and accuracy.
//! 3. **Reporting:** The fixed-width text report printed at the end of a run.

use std::fmt;

/// Prediction statistics for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredictionStats {
    /// Number of conditional branches predicted.
    pub branches: u64,
    /// Number of branches whose true outcome was taken.
    pub taken: u64,
    /// Number of predictions that disagreed with the true outcome.
    pub mispredictions: u64,
}

impl PredictionStats {
    /// Creates an empty set of statistics.
    pub const fn new() -> Self {
        Self {
            branches: 0,
            taken: 0,
            mispredictions: 0,
        }
    }

    /// Records one prediction against its resolved outcome.
    ///
    /// Returns `true` if the prediction was correct.
    #[inline]
    pub const fn record(&mut self, predicted: bool, taken: bool) -> bool {
        self.branches += 1;
        if taken {
            self.taken += 1;
        }
        let correct = predicted == taken;
        if !correct {
            self.mispredictions += 1;
        }
        correct
    }

    /// Number of correct predictions.
    pub const fn correct(&self) -> u64 {
        self.branches - self.mispredictions
    }

    /// Mispredictions as a percentage of branches; `0.0` for an empty run.
    pub fn misprediction_rate(&self) -> f64 {
        if self.branches == 0 {
            return 0.0;
        }
        self.mispredictions as f64 / self.branches as f64 * 100.0
    }

    /// Correct predictions as a percentage of branches; `0.0` for an empty run.
    pub fn accuracy(&self) -> f64 {
        if self.branches == 0 {
            return 0.0;
        }
        self.correct() as f64 / self.branches as f64 * 100.0
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for PredictionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branches:        {:10}", self.branches)?;
        writeln!(f, "Incorrect:       {:10}", self.mispredictions)?;
        write!(f, "Misprediction Rate: {:7.3}", self.misprediction_rate())
    }
}
