//! Branch prediction unit (BRU) implementations.
//!
//! This module contains the four selectable direction predictors (static,
//! gshare, tournament, and the skewed "custom" predictor) together with the
//! building blocks they share: the 2-bit saturating counter, the history
//! register, and the counter table.

pub use self::branch_predictor::BranchPredictor;

/// Branch predictor trait.
pub mod branch_predictor;

/// Two-bit saturating counter state machine.
pub mod counter;

/// Global history branch predictor (gshare algorithm).
pub mod gshare;

/// Branch outcome shift register.
pub mod history;

/// Skewed three-table majority-vote predictor.
pub mod skewed;

/// Static branch predictor (always taken).
pub mod static_bp;

/// Power-of-two counter tables.
pub mod table;

/// Tournament branch predictor (combines local and global predictors).
pub mod tournament;

use tracing::debug;

use self::{
    gshare::GSharePredictor, skewed::SkewedPredictor, static_bp::StaticPredictor,
    tournament::TournamentPredictor,
};
use crate::common::ConfigError;
use crate::config::{PredictorConfig, Strategy};

/// Enum wrapper for static dispatch of Branch Predictors.
///
/// Constructing one is the `init` step of a run: it allocates exactly the tables owned
/// by the selected strategy. Switching strategy means constructing a new value.
#[derive(Debug, Clone)]
pub enum Predictor {
    /// Always taken; no tables.
    Static(StaticPredictor),
    /// Single global-history table.
    GShare(GSharePredictor),
    /// Local/global hybrid with a choice table.
    Tournament(TournamentPredictor),
    /// Skewed three-table majority vote.
    Custom(SkewedPredictor),
}

impl Predictor {
    /// Creates a new predictor for the configured strategy.
    ///
    /// Validates the widths of the selected strategy and allocates its tables with every
    /// counter weakly not-taken and every history register empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HistoryWidthOutOfRange`] for invalid widths and
    /// [`ConfigError::Allocation`] if a table cannot be allocated.
    pub fn new(config: &PredictorConfig) -> Result<Self, ConfigError> {
        let predictor = match config.strategy {
            Strategy::Static => Self::Static(StaticPredictor::new()),
            Strategy::GShare => Self::GShare(GSharePredictor::new(&config.gshare)?),
            Strategy::Tournament => {
                Self::Tournament(TournamentPredictor::new(&config.tournament)?)
            }
            Strategy::Custom => Self::Custom(SkewedPredictor::new(&config.custom)?),
        };

        debug!(
            predictor = %config,
            storage_bits = predictor.storage_bits(),
            "branch predictor initialized"
        );
        Ok(predictor)
    }

    /// The active strategy.
    pub const fn strategy(&self) -> Strategy {
        match self {
            Self::Static(_) => Strategy::Static,
            Self::GShare(_) => Strategy::GShare,
            Self::Tournament(_) => Strategy::Tournament,
            Self::Custom(_) => Strategy::Custom,
        }
    }

    /// Total predictor state in bits (counters plus history registers).
    pub fn storage_bits(&self) -> usize {
        match self {
            Self::Static(_) => 0,
            Self::GShare(bp) => bp.storage_bits(),
            Self::Tournament(bp) => bp.storage_bits(),
            Self::Custom(bp) => bp.storage_bits(),
        }
    }
}

impl BranchPredictor for Predictor {
    /// Predicts whether the branch at `pc` will be taken using the active strategy.
    #[inline(always)]
    fn predict(&self, pc: u32) -> bool {
        match self {
            Self::Static(bp) => bp.predict(pc),
            Self::GShare(bp) => bp.predict(pc),
            Self::Tournament(bp) => bp.predict(pc),
            Self::Custom(bp) => bp.predict(pc),
        }
    }

    /// Trains the active strategy with the resolved outcome.
    #[inline(always)]
    fn train(&mut self, pc: u32, taken: bool) {
        match self {
            Self::Static(bp) => bp.train(pc, taken),
            Self::GShare(bp) => bp.train(pc, taken),
            Self::Tournament(bp) => bp.train(pc, taken),
            Self::Custom(bp) => bp.train(pc, taken),
        }
    }
}
