//! Skewed Branch Predictor (the "custom" strategy).
//!
//! Three counter tables share one global history but are addressed by three different
//! hashes of PC and history, so two branches that alias in one table rarely alias in the
//! other two. The prediction is the majority vote of the three counters.
//!
//! With history width `S`:
//! - Table 1 has `2^(S+1)` entries, indexed by `pc ^ hist` over `S+1` bits.
//! - Table 2 and Table 3 have `2^S` entries, indexed by `pc ^ hist` over `S` bits and then
//!   skewed by the low `S-6` PC bits, unshifted for Table 2 and shifted left by 6 for Table 3.
//!
//! Training uses partial update: when the vote is right, only the tables that voted for the
//! outcome are strengthened; when it is wrong, all three are trained.

use super::BranchPredictor;
use super::history::{HistoryRegister, low_mask};
use super::table::CounterTable;
use crate::common::ConfigError;
use crate::config::SkewedConfig;

/// Shift applied to the skew bits for Table 3.
const SKEW_SHIFT: u32 = 6;

/// Skewed Predictor structure.
#[derive(Debug, Clone)]
pub struct SkewedPredictor {
    /// History shared by all three tables.
    history: HistoryRegister,
    /// History width `S`.
    history_bits: u32,
    /// Table 1 (`2^(S+1)` entries), Table 2 and Table 3 (`2^S` entries each).
    tables: [CounterTable; 3],
}

impl SkewedPredictor {
    /// Creates a new Skewed Predictor with an empty history and all counters weakly not-taken.
    ///
    /// # Errors
    ///
    /// Fails if `config.history_bits` is narrower than the 6-bit skew shift or too wide to allocate.
    pub fn new(config: &SkewedConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let history_bits = config.history_bits;

        Ok(Self {
            history: HistoryRegister::new(),
            history_bits,
            tables: [
                CounterTable::new("skewed 1", history_bits + 1)?,
                CounterTable::new("skewed 2", history_bits)?,
                CounterTable::new("skewed 3", history_bits)?,
            ],
        })
    }

    /// Computes the three table indices for `pc` against the current history.
    #[inline(always)]
    pub fn indices(&self, pc: u32) -> [usize; 3] {
        let pc = u64::from(pc);
        let hist = self.history.bits();

        let ext_mask = low_mask(self.history_bits + 1);
        let base_mask = low_mask(self.history_bits);
        let skew_mask = low_mask(self.history_bits - SKEW_SHIFT);

        let index1 = (pc & ext_mask) ^ (hist & ext_mask);
        let index_base = (pc & base_mask) ^ (hist & base_mask);
        let skew = pc & skew_mask;
        let index2 = index_base ^ skew;
        let index3 = index_base ^ (skew << SKEW_SHIFT);

        [index1 as usize, index2 as usize, index3 as usize]
    }

    /// The individual prediction of each table for `pc`.
    #[inline(always)]
    pub fn votes(&self, pc: u32) -> [bool; 3] {
        let idx = self.indices(pc);
        [
            self.tables[0].predict(idx[0]),
            self.tables[1].predict(idx[1]),
            self.tables[2].predict(idx[2]),
        ]
    }

    /// The shared history register.
    pub const fn history(&self) -> HistoryRegister {
        self.history
    }

    /// Table `n` (0, 1 or 2).
    pub fn table(&self, n: usize) -> &CounterTable {
        &self.tables[n]
    }

    /// Storage cost in bits: three counter tables plus the widest history slice read.
    pub fn storage_bits(&self) -> usize {
        self.tables.iter().map(CounterTable::storage_bits).sum::<usize>()
            + (self.history_bits + 1) as usize
    }

    fn majority(&self, idx: &[usize; 3]) -> bool {
        let sum: i32 = self
            .tables
            .iter()
            .zip(idx)
            .map(|(table, &i)| table.get(i).vote())
            .sum();
        sum > 0
    }
}

impl BranchPredictor for SkewedPredictor {
    /// Majority vote of the three tables.
    fn predict(&self, pc: u32) -> bool {
        self.majority(&self.indices(pc))
    }

    /// Partial update on a correct vote, full update on a wrong one; history last.
    fn train(&mut self, pc: u32, taken: bool) {
        let idx = self.indices(pc);
        let votes = self.votes(pc);
        let vote_correct = self.majority(&idx) == taken;

        for ((table, &i), vote) in self.tables.iter_mut().zip(&idx).zip(votes) {
            if !vote_correct || vote == taken {
                table.update(i, taken);
            }
        }

        self.history.push(taken);
    }
}
