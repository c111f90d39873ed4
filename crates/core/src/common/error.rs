//! Error definitions.
//!
//! This module defines the error types reported by the predictor engine and its trace driver. It provides:
//! 1. **Configuration Errors:** Invalid history widths, unknown strategies, unreadable config files, and failed table allocation.
//! 2. **Trace Errors:** I/O failures and malformed branch records, tagged with their line number.
//! 3. **Simulation Errors:** A wrapper over both for the simulation entry points.
//!
//! The predict/train path has no error type: counter states are a closed enumeration and
//! every table index is masked to its table size.

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

/// Errors raised while building or validating a predictor configuration.
///
/// All of these are startup failures; none can occur once a predictor has been constructed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A history/index width lies outside the range the table supports.
    #[error("{table} width of {bits} bits is out of range (expected {min}..={max})")]
    HistoryWidthOutOfRange {
        /// Name of the table whose width is invalid.
        table: &'static str,
        /// The configured width in bits.
        bits: u32,
        /// Smallest accepted width.
        min: u32,
        /// Largest accepted width.
        max: u32,
    },

    /// Backing storage for a table could not be allocated.
    #[error("failed to allocate {entries} entries for the {table} table")]
    Allocation {
        /// Name of the table being allocated.
        table: &'static str,
        /// Number of entries requested.
        entries: usize,
        /// Underlying allocator error.
        #[source]
        source: TryReserveError,
    },

    /// The strategy name is not one of the four supported predictors.
    #[error("unknown predictor strategy `{0}` (expected static, gshare, tournament or custom)")]
    UnknownStrategy(String),

    /// A `strategy[:bits[:bits]]` selector could not be parsed.
    #[error("invalid predictor selector `{0}`")]
    InvalidSelector(String),

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] io::Error),

    /// The configuration file is not valid JSON for [`Config`](crate::config::Config).
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while reading a branch trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The underlying reader failed.
    #[error("failed to read trace: {0}")]
    Io(#[from] io::Error),

    /// A line does not have the `<pc> <outcome>` shape.
    #[error("line {line}: expected `<pc> <outcome>`, found `{content}`")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// The branch address is not a hexadecimal value that fits in 32 bits.
    #[error("line {line}: invalid branch address `{pc}`")]
    InvalidPc {
        /// 1-based line number.
        line: usize,
        /// The address field as written.
        pc: String,
    },

    /// The outcome field is neither `0` nor `1`.
    #[error("line {line}: invalid branch outcome `{outcome}` (expected 0 or 1)")]
    InvalidOutcome {
        /// 1-based line number.
        line: usize,
        /// The outcome field as written.
        outcome: String,
    },
}

/// Errors raised by a full simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// The predictor could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The trace could not be read.
    #[error(transparent)]
    Trace(#[from] TraceError),
}
