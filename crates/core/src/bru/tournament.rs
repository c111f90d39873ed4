//! Tournament Branch Predictor.
//!
//! A hybrid predictor that employs a meta-predictor (Choice PHT) to select
//! between a Global predictor indexed by global history and a Local predictor
//! (per-address history, PAg). This allows the predictor to adapt to different
//! types of branch behaviors.
//!
//! A choice counter that predicts "taken" selects the local predictor; "not-taken"
//! selects the global one. The choice counter is trained only when the two
//! components disagree about the outcome.

use super::BranchPredictor;
use super::history::{HistoryRegister, low_mask};
use super::table::{CounterTable, alloc_table};
use crate::common::ConfigError;
use crate::config::TournamentConfig;

/// Tournament Predictor structure.
#[derive(Debug, Clone)]
pub struct TournamentPredictor {
    /// Global History Register.
    ghr: HistoryRegister,
    /// Width of the global history slice (log2 of the global and choice table sizes).
    global_bits: u32,
    /// Width of each local history (log2 of the local history and local PHT sizes).
    local_bits: u32,

    /// Global Pattern History Table.
    global_pht: CounterTable,

    /// Local History Table storing one history pattern per PC slot.
    local_history_table: Vec<u16>,

    /// Local Pattern History Table indexed by local history patterns.
    local_pht: CounterTable,

    /// Choice Prediction Table. Taken selects Local, not-taken selects Global.
    choice_pht: CounterTable,
}

impl TournamentPredictor {
    /// Creates a new Tournament Predictor based on the provided configuration.
    ///
    /// # Errors
    ///
    /// Fails if either width is invalid or a table cannot be allocated.
    pub fn new(config: &TournamentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let global_bits = config.global_bits;
        let local_bits = config.local_bits;

        Ok(Self {
            ghr: HistoryRegister::new(),
            global_bits,
            local_bits,
            global_pht: CounterTable::new("tournament global", global_bits)?,
            local_history_table: alloc_table("tournament local history", local_bits, 0u16)?,
            local_pht: CounterTable::new("tournament local", local_bits)?,
            choice_pht: CounterTable::new("tournament choice", global_bits)?,
        })
    }

    /// Index shared by the global PHT and the choice PHT: the low global history bits.
    #[inline(always)]
    pub fn global_index(&self) -> usize {
        self.ghr.low_bits(self.global_bits) as usize
    }

    /// Slot of `pc` in the Local History Table.
    #[inline(always)]
    pub fn local_slot(&self, pc: u32) -> usize {
        (u64::from(pc) & low_mask(self.local_bits)) as usize
    }

    /// The local history pattern currently recorded for `pc`.
    #[inline(always)]
    pub fn local_history(&self, pc: u32) -> u16 {
        self.local_history_table[self.local_slot(pc)]
    }

    /// Retrieves the prediction from the Global component.
    #[inline(always)]
    pub fn global_prediction(&self) -> bool {
        self.global_pht.predict(self.global_index())
    }

    /// Retrieves the prediction from the Local component.
    #[inline(always)]
    pub fn local_prediction(&self, pc: u32) -> bool {
        self.local_pht.predict(usize::from(self.local_history(pc)))
    }

    /// The global history register.
    pub const fn history(&self) -> HistoryRegister {
        self.ghr
    }

    /// The global pattern history table.
    pub const fn global_table(&self) -> &CounterTable {
        &self.global_pht
    }

    /// The local pattern history table.
    pub const fn local_table(&self) -> &CounterTable {
        &self.local_pht
    }

    /// The choice table.
    pub const fn choice_table(&self) -> &CounterTable {
        &self.choice_pht
    }

    /// Storage cost in bits: three counter tables, the local histories, and the global history.
    pub fn storage_bits(&self) -> usize {
        self.global_pht.storage_bits()
            + self.local_pht.storage_bits()
            + self.choice_pht.storage_bits()
            + self.local_history_table.len() * self.local_bits as usize
            + self.global_bits as usize
    }
}

impl BranchPredictor for TournamentPredictor {
    /// Queries the choice PHT and returns the prediction of the component it selects.
    fn predict(&self, pc: u32) -> bool {
        if self.choice_pht.predict(self.global_index()) {
            self.local_prediction(pc)
        } else {
            self.global_prediction()
        }
    }

    /// Trains both components, the choice PHT on disagreement, and finally the global history.
    ///
    /// The local counter trained is the one addressed by the local history *after* the
    /// outcome has been shifted into it.
    fn train(&mut self, pc: u32, taken: bool) {
        let g_idx = self.global_index();
        let slot = self.local_slot(pc);

        let global_correct = self.global_prediction() == taken;
        let local_correct = self.local_prediction(pc) == taken;

        self.global_pht.update(g_idx, taken);

        let pattern = self.local_history_table[slot];
        let pattern = ((u64::from(pattern) << 1) | u64::from(taken)) & low_mask(self.local_bits);
        self.local_history_table[slot] = pattern as u16;
        self.local_pht.update(pattern as usize, taken);

        match (local_correct, global_correct) {
            (true, false) => self.choice_pht.update(g_idx, true),
            (false, true) => self.choice_pht.update(g_idx, false),
            _ => {}
        }

        self.ghr.push(taken);
    }
}
