//! Simulator: drives a predictor over a stream of resolved branches.
//!
//! For every branch the simulator asks for a prediction, scores it against the true
//! outcome, and only then trains the predictor, so each `train` follows exactly one
//! `predict` for the same branch.

use tracing::{info, trace};

use crate::bru::{BranchPredictor, Predictor};
use crate::common::{BranchRecord, ConfigError, TraceError};
use crate::config::PredictorConfig;
use crate::stats::PredictionStats;

/// Top-level simulator: a predictor plus the statistics gathered so far.
#[derive(Debug)]
pub struct Simulator<P> {
    /// Predictor under evaluation.
    predictor: P,
    /// Running prediction statistics.
    stats: PredictionStats,
}

impl Simulator<Predictor> {
    /// Creates a simulator around a freshly initialized predictor for `config`.
    ///
    /// # Errors
    ///
    /// Propagates the [`ConfigError`] from [`Predictor::new`].
    pub fn from_config(config: &PredictorConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(Predictor::new(config)?))
    }
}

impl<P: BranchPredictor> Simulator<P> {
    /// Creates a new simulator around `predictor`.
    pub const fn new(predictor: P) -> Self {
        Self {
            predictor,
            stats: PredictionStats::new(),
        }
    }

    /// Predicts, scores and trains a single branch. Returns the prediction.
    pub fn step(&mut self, record: BranchRecord) -> bool {
        let prediction = self.predictor.predict(record.pc);
        let correct = self.stats.record(prediction, record.taken);
        trace!(
            pc = record.pc,
            prediction,
            taken = record.taken,
            correct,
            "branch"
        );
        self.predictor.train(record.pc, record.taken);
        prediction
    }

    /// Runs every record from `records` through [`Simulator::step`].
    ///
    /// # Errors
    ///
    /// Stops at the first trace error; statistics gathered up to that point are kept.
    pub fn run<I>(&mut self, records: I) -> Result<PredictionStats, TraceError>
    where
        I: IntoIterator<Item = Result<BranchRecord, TraceError>>,
    {
        for record in records {
            let _ = self.step(record?);
        }

        info!(
            branches = self.stats.branches,
            mispredictions = self.stats.mispredictions,
            rate = self.stats.misprediction_rate(),
            "trace complete"
        );
        Ok(self.stats)
    }

    /// Statistics gathered so far.
    pub const fn stats(&self) -> &PredictionStats {
        &self.stats
    }

    /// The predictor under evaluation.
    pub const fn predictor(&self) -> &P {
        &self.predictor
    }

    /// Consumes the simulator, returning the predictor and its statistics.
    pub fn into_parts(self) -> (P, PredictionStats) {
        (self.predictor, self.stats)
    }
}
