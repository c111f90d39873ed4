//! Common types shared by the predictor engine and its driver.
//!
//! This module provides:
//! 1. **Branch Records:** The `(pc, outcome)` pair exchanged with the trace driver.
//! 2. **Error Handling:** Configuration, trace, and simulation error types.

/// Error types for configuration, trace reading, and simulation.
pub mod error;

pub use error::{ConfigError, SimError, TraceError};

/// A resolved conditional branch: its address and whether it was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BranchRecord {
    /// Address of the branch instruction.
    pub pc: u32,
    /// Ground-truth outcome (`true` = taken).
    pub taken: bool,
}

impl BranchRecord {
    /// Creates a new branch record.
    #[inline]
    pub const fn new(pc: u32, taken: bool) -> Self {
        Self { pc, taken }
    }
}
