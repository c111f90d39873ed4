//! Conditional branch predictor simulator library.
//!
//! This crate implements a trace-driven branch direction predictor engine with the following:
//! 1. **Predictors:** Static (always taken), gshare, tournament, and a skewed three-table predictor.
//! 2. **State:** 2-bit saturating counters, history registers, and power-of-two counter tables.
//! 3. **Configuration:** Per-strategy history widths with defaults, validation, and JSON loading.
//! 4. **Simulation:** Trace reader, predict/train loop, and misprediction statistics.
//!
//! A run builds one [`Predictor`] from a [`config::PredictorConfig`], then for every branch
//! calls [`BranchPredictor::predict`] followed by [`BranchPredictor::train`].

/// Branch prediction units (counters, tables, predictors, dispatch).
pub mod bru;
/// Common types (branch records, errors).
pub mod common;
/// Predictor configuration (defaults, strategies, width records).
pub mod config;
/// Trace reading and the simulation loop.
pub mod sim;
/// Prediction statistics collection and reporting.
pub mod stats;

/// Predictor interface implemented by every strategy and by the dispatcher.
pub use crate::bru::BranchPredictor;
/// Strategy dispatcher; construct with `Predictor::new`.
pub use crate::bru::Predictor;
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Simulation loop over a branch stream.
pub use crate::sim::Simulator;
