//! Configuration system for the branch predictor simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the predictors. It provides:
//! 1. **Defaults:** Baseline history widths for every predictor family.
//! 2. **Structures:** Per-strategy width records grouped under a root `Config`.
//! 3. **Enums:** The four selectable prediction strategies.
//! 4. **Parsing:** JSON loading and the compact `strategy[:bits[:bits]]` selector used on the command line.
//!
//! Widths are fixed for the lifetime of a predictor; choosing different widths means building a new one.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the predictors.
///
/// These values define the baseline table dimensions when not
/// explicitly overridden in a JSON configuration or selector.
mod defaults {
    /// Default gshare global history width (16384-entry table).
    pub const GSHARE_HISTORY_BITS: u32 = 14;

    /// Default tournament global history width (4096-entry global and chooser tables).
    pub const TOURNAMENT_GLOBAL_BITS: u32 = 12;

    /// Default tournament local history width (1024-entry local history and local counter tables).
    pub const TOURNAMENT_LOCAL_BITS: u32 = 10;

    /// Default skewed predictor history width.
    ///
    /// Table-1 uses one extra bit (8192 entries); Table-2 and Table-3 hold 4096 entries each.
    pub const SKEW_HISTORY_BITS: u32 = 12;
}

/// Accepted width ranges, in bits, for each table family.
pub mod limits {
    /// Widest gshare history.
    pub const GSHARE_MAX_BITS: u32 = 30;

    /// Widest tournament global history.
    pub const TOURNAMENT_GLOBAL_MAX_BITS: u32 = 30;

    /// Widest tournament local history; local histories are stored as `u16`.
    pub const TOURNAMENT_LOCAL_MAX_BITS: u32 = 16;

    /// Narrowest skewed history; the skewing hashes use the low `S - 6` bits of the PC.
    pub const SKEW_MIN_BITS: u32 = 6;

    /// Widest skewed history; Table-1 is indexed with `S + 1` bits.
    pub const SKEW_MAX_BITS: u32 = 29;
}

/// Branch prediction strategies.
///
/// Exactly one strategy is active per predictor instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Strategy {
    /// Always predict taken; keeps no state.
    #[default]
    Static,
    /// Global history XOR PC indexing a single counter table.
    #[serde(alias = "Gshare", alias = "GSHARE")]
    GShare,
    /// Local and global predictors arbitrated by a chooser table.
    Tournament,
    /// Skewed predictor: three tables, three hashes, majority vote.
    #[serde(alias = "Skewed")]
    Custom,
}

impl Strategy {
    /// Human-readable strategy name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Static => "Static",
            Self::GShare => "Gshare",
            Self::Tournament => "Tournament",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "gshare" => Ok(Self::GShare),
            "tournament" => Ok(Self::Tournament),
            "custom" | "skewed" => Ok(Self::Custom),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use bpsim_core::config::{Config, Strategy};
///
/// let json = r#"{
///     "predictor": {
///         "strategy": "Tournament",
///         "tournament": { "global_bits": 13, "local_bits": 11 }
///     },
///     "sim": { "verbose": true }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.predictor.strategy, Strategy::Tournament);
/// assert_eq!(config.predictor.tournament.global_bits, 13);
/// assert_eq!(config.predictor.gshare.history_bits, 14);
/// assert!(config.sim.verbose);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Predictor selection and table dimensions
    #[serde(default)]
    pub predictor: PredictorConfig,
    /// Driver settings
    #[serde(default)]
    pub sim: SimConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// Missing sections and fields take their defaults. The result is validated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and
    /// [`ConfigError::HistoryWidthOutOfRange`] if the active strategy's widths are invalid.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.predictor.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Driver settings that do not affect prediction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimConfig {
    /// Log every branch (pc, prediction, outcome) at trace level
    #[serde(default)]
    pub verbose: bool,
}

/// Predictor selection plus the table dimensions of every strategy.
///
/// Only the record matching `strategy` is consulted when a predictor is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct PredictorConfig {
    /// Active strategy
    #[serde(default)]
    pub strategy: Strategy,

    /// Gshare dimensions
    #[serde(default)]
    pub gshare: GShareConfig,

    /// Tournament dimensions
    #[serde(default)]
    pub tournament: TournamentConfig,

    /// Skewed (custom) predictor dimensions
    #[serde(default)]
    pub custom: SkewedConfig,
}

impl PredictorConfig {
    /// Creates a configuration for `strategy` with default widths.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Checks the widths of the active strategy against [`limits`].
    ///
    /// Widths of inactive strategies are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HistoryWidthOutOfRange`] naming the offending table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.strategy {
            Strategy::Static => Ok(()),
            Strategy::GShare => self.gshare.validate(),
            Strategy::Tournament => self.tournament.validate(),
            Strategy::Custom => self.custom.validate(),
        }
    }
}

fn check_width(table: &'static str, bits: u32, min: u32, max: u32) -> Result<(), ConfigError> {
    if (min..=max).contains(&bits) {
        Ok(())
    } else {
        Err(ConfigError::HistoryWidthOutOfRange {
            table,
            bits,
            min,
            max,
        })
    }
}

/// Parses a selector of the form `static`, `gshare[:H]`, `tournament[:G[:L]]` or `custom[:S]`.
///
/// Omitted widths keep their defaults. The widths are not validated here; that happens when
/// the predictor is built.
///
/// ```
/// use bpsim_core::config::{PredictorConfig, Strategy};
///
/// let cfg: PredictorConfig = "tournament:9:8".parse().unwrap();
/// assert_eq!(cfg.strategy, Strategy::Tournament);
/// assert_eq!(cfg.tournament.global_bits, 9);
/// assert_eq!(cfg.tournament.local_bits, 8);
/// ```
impl FromStr for PredictorConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.trim().trim_start_matches("--").split(':');
        let strategy: Strategy = fields.next().unwrap_or_default().parse()?;

        let widths = fields
            .map(|f| {
                f.trim()
                    .parse::<u32>()
                    .map_err(|_| ConfigError::InvalidSelector(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut cfg = Self::new(strategy);
        match (strategy, widths.as_slice()) {
            (_, []) => {}
            (Strategy::GShare, [h]) => cfg.gshare.history_bits = *h,
            (Strategy::Tournament, [g]) => cfg.tournament.global_bits = *g,
            (Strategy::Tournament, [g, l]) => {
                cfg.tournament.global_bits = *g;
                cfg.tournament.local_bits = *l;
            }
            (Strategy::Custom, [s_bits]) => cfg.custom.history_bits = *s_bits,
            _ => return Err(ConfigError::InvalidSelector(s.to_string())),
        }
        Ok(cfg)
    }
}

impl fmt::Display for PredictorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.strategy {
            Strategy::Static => write!(f, "{}", self.strategy),
            Strategy::GShare => write!(f, "{}:{}", self.strategy, self.gshare.history_bits),
            Strategy::Tournament => write!(
                f,
                "{}:{}:{}",
                self.strategy, self.tournament.global_bits, self.tournament.local_bits
            ),
            Strategy::Custom => write!(f, "{}:{}", self.strategy, self.custom.history_bits),
        }
    }
}

/// Gshare predictor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GShareConfig {
    /// Global history width; the counter table holds `2^history_bits` entries
    #[serde(default = "GShareConfig::default_history")]
    pub history_bits: u32,
}

impl GShareConfig {
    /// Returns the default gshare history width.
    fn default_history() -> u32 {
        defaults::GSHARE_HISTORY_BITS
    }

    /// Checks the history width against [`limits::GSHARE_MAX_BITS`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HistoryWidthOutOfRange`] for a zero or too-wide history.
    pub fn validate(self) -> Result<(), ConfigError> {
        check_width("gshare history", self.history_bits, 1, limits::GSHARE_MAX_BITS)
    }
}

impl Default for GShareConfig {
    fn default() -> Self {
        Self {
            history_bits: defaults::GSHARE_HISTORY_BITS,
        }
    }
}

/// Tournament branch predictor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TournamentConfig {
    /// Global history width (log2 of the global and chooser table sizes)
    #[serde(default = "TournamentConfig::default_global")]
    pub global_bits: u32,

    /// Local history width (log2 of the local history and local counter table sizes)
    #[serde(default = "TournamentConfig::default_local")]
    pub local_bits: u32,
}

impl TournamentConfig {
    /// Returns the default tournament global history width.
    fn default_global() -> u32 {
        defaults::TOURNAMENT_GLOBAL_BITS
    }

    /// Returns the default tournament local history width.
    fn default_local() -> u32 {
        defaults::TOURNAMENT_LOCAL_BITS
    }

    /// Checks both widths against their [`limits`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HistoryWidthOutOfRange`] for the first invalid width.
    pub fn validate(self) -> Result<(), ConfigError> {
        check_width(
            "tournament global",
            self.global_bits,
            1,
            limits::TOURNAMENT_GLOBAL_MAX_BITS,
        )?;
        check_width(
            "tournament local",
            self.local_bits,
            1,
            limits::TOURNAMENT_LOCAL_MAX_BITS,
        )
    }
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            global_bits: defaults::TOURNAMENT_GLOBAL_BITS,
            local_bits: defaults::TOURNAMENT_LOCAL_BITS,
        }
    }
}

/// Skewed (custom) predictor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SkewedConfig {
    /// Shared history width `S`; tables hold `2^(S+1)`, `2^S` and `2^S` entries
    #[serde(default = "SkewedConfig::default_history")]
    pub history_bits: u32,
}

impl SkewedConfig {
    /// Returns the default skewed history width.
    fn default_history() -> u32 {
        defaults::SKEW_HISTORY_BITS
    }

    /// Checks the history width against [`limits::SKEW_MIN_BITS`] and [`limits::SKEW_MAX_BITS`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HistoryWidthOutOfRange`] outside that range.
    pub fn validate(self) -> Result<(), ConfigError> {
        check_width(
            "skewed history",
            self.history_bits,
            limits::SKEW_MIN_BITS,
            limits::SKEW_MAX_BITS,
        )
    }
}

impl Default for SkewedConfig {
    fn default() -> Self {
        Self {
            history_bits: defaults::SKEW_HISTORY_BITS,
        }
    }
}
