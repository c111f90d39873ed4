//! Trace-driven simulation.
//!
//! Provides the trace reader that turns text traces into branch records and the
//! simulator loop that feeds them through a predictor.

/// Predict/score/train loop over a branch stream.
pub mod simulator;

/// Text trace parsing.
pub mod trace;

pub use simulator::Simulator;
pub use trace::TraceReader;
