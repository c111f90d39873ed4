//! GShare Branch Predictor.
//!
//! GShare correlates global branch history with the program counter using an XOR
//! hash. This allows the predictor to distinguish the same branch instruction
//! in different execution contexts.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `predict()`: O(1)
//!   - `train()`: O(1)
//! - **Space Complexity:** O(2^H) two-bit counters, where H is the history width (14 bits = 32 Kbit by default)
//! - **Best Case:** Correlated branches where outcome depends on recent history
//! - **Worst Case:** Uncorrelated branches or history length too short/long for pattern

use super::BranchPredictor;
use super::history::{HistoryRegister, low_mask};
use super::table::CounterTable;
use crate::common::ConfigError;
use crate::config::GShareConfig;

/// GShare Predictor structure.
#[derive(Debug, Clone)]
pub struct GSharePredictor {
    /// Global History Register storing recent branch outcomes.
    ghr: HistoryRegister,
    /// Pattern History Table of `2^history_bits` counters.
    pht: CounterTable,
    /// Width of the history slice and of the PC slice used for indexing.
    history_bits: u32,
}

impl GSharePredictor {
    /// Creates a new GShare Predictor with an empty history and all counters weakly not-taken.
    ///
    /// # Errors
    ///
    /// Fails if the history width is invalid or the table cannot be allocated.
    pub fn new(config: &GShareConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let history_bits = config.history_bits;
        Ok(Self {
            ghr: HistoryRegister::new(),
            pht: CounterTable::new("gshare", history_bits)?,
            history_bits,
        })
    }

    /// Calculates the index into the Pattern History Table.
    ///
    /// Computes the XOR of the low PC bits and the low Global History Register bits,
    /// using the history as it stands before the current branch is trained.
    #[inline(always)]
    pub fn index(&self, pc: u32) -> usize {
        let pc_part = u64::from(pc) & low_mask(self.history_bits);
        let ghr_part = self.ghr.low_bits(self.history_bits);
        (pc_part ^ ghr_part) as usize
    }

    /// The global history register.
    pub const fn history(&self) -> HistoryRegister {
        self.ghr
    }

    /// The pattern history table.
    pub const fn table(&self) -> &CounterTable {
        &self.pht
    }

    /// Storage cost in bits: the counter table plus the history bits it reads.
    pub fn storage_bits(&self) -> usize {
        self.pht.storage_bits() + self.history_bits as usize
    }
}

impl BranchPredictor for GSharePredictor {
    /// Returns the direction of the counter at the hashed index.
    fn predict(&self, pc: u32) -> bool {
        self.pht.predict(self.index(pc))
    }

    /// Trains the counter at the hashed index, then shifts the outcome into the history.
    fn train(&mut self, pc: u32, taken: bool) {
        let idx = self.index(pc);
        self.pht.update(idx, taken);
        self.ghr.push(taken);
    }
}
