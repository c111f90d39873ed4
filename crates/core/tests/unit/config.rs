//! # Configuration Tests
//!
//! Defaults, JSON deserialization, selector parsing, and validation.

use std::io::Write;

use bpsim_core::common::ConfigError;
use bpsim_core::config::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.predictor.strategy, Strategy::Static);
    assert!(!config.sim.verbose);
}

#[test]
fn test_predictor_widths_default() {
    let cfg = PredictorConfig::default();
    assert_eq!(cfg.gshare, GShareConfig { history_bits: 14 });
    assert_eq!(
        cfg.tournament,
        TournamentConfig {
            global_bits: 12,
            local_bits: 10,
        }
    );
    assert_eq!(cfg.custom, SkewedConfig { history_bits: 12 });
}

#[test]
fn test_default_widths_validate() {
    for strategy in [
        Strategy::Static,
        Strategy::GShare,
        Strategy::Tournament,
        Strategy::Custom,
    ] {
        assert!(PredictorConfig::new(strategy).validate().is_ok());
    }
}

// ══════════════════════════════════════════════════════════
// JSON
// ══════════════════════════════════════════════════════════

#[test]
fn test_json_empty_object_is_default() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config.predictor, PredictorConfig::default());
}

#[test]
fn test_json_partial_section_keeps_defaults() {
    let config = Config::from_json_str(
        r#"{ "predictor": { "strategy": "Gshare", "tournament": { "local_bits": 8 } } }"#,
    )
    .unwrap();
    assert_eq!(config.predictor.strategy, Strategy::GShare);
    assert_eq!(config.predictor.gshare.history_bits, 14);
    assert_eq!(config.predictor.tournament.global_bits, 12);
    assert_eq!(config.predictor.tournament.local_bits, 8);
}

#[test]
fn test_json_custom_aliases() {
    for name in ["Custom", "Skewed"] {
        let json = format!(r#"{{ "predictor": {{ "strategy": "{name}" }} }}"#);
        let config = Config::from_json_str(&json).unwrap();
        assert_eq!(config.predictor.strategy, Strategy::Custom);
    }
}

#[test]
fn test_json_rejects_invalid_active_width() {
    let err = Config::from_json_str(
        r#"{ "predictor": { "strategy": "Custom", "custom": { "history_bits": 4 } } }"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::HistoryWidthOutOfRange { bits: 4, .. }
    ));
}

#[test]
fn test_json_syntax_error() {
    let err = Config::from_json_str("{ predictor: ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_json_unknown_strategy() {
    let err = Config::from_json_str(r#"{ "predictor": { "strategy": "Perceptron" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_json_file_roundtrip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{ "predictor": {{ "strategy": "Tournament", "tournament": {{ "global_bits": 9 }} }}, "sim": {{ "verbose": true }} }}"#
    )
    .unwrap();

    let config = Config::from_json_file(file.path()).unwrap();
    assert_eq!(config.predictor.strategy, Strategy::Tournament);
    assert_eq!(config.predictor.tournament.global_bits, 9);
    assert_eq!(config.predictor.tournament.local_bits, 10);
    assert!(config.sim.verbose);
}

#[test]
fn test_json_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

// ══════════════════════════════════════════════════════════
// Selectors
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("static", Strategy::Static)]
#[case("--static", Strategy::Static)]
#[case("GShare", Strategy::GShare)]
#[case("--gshare", Strategy::GShare)]
#[case("tournament", Strategy::Tournament)]
#[case("custom", Strategy::Custom)]
#[case("skewed", Strategy::Custom)]
fn test_selector_strategy(#[case] selector: &str, #[case] strategy: Strategy) {
    let cfg: PredictorConfig = selector.parse().unwrap();
    assert_eq!(cfg, PredictorConfig::new(strategy));
}

#[test]
fn test_selector_widths() {
    let cfg: PredictorConfig = "gshare:13".parse().unwrap();
    assert_eq!(cfg.gshare.history_bits, 13);

    let cfg: PredictorConfig = "tournament:11".parse().unwrap();
    assert_eq!(cfg.tournament.global_bits, 11);
    assert_eq!(cfg.tournament.local_bits, 10);

    let cfg: PredictorConfig = "tournament:11:9".parse().unwrap();
    assert_eq!(
        cfg.tournament,
        TournamentConfig {
            global_bits: 11,
            local_bits: 9,
        }
    );

    let cfg: PredictorConfig = "custom:10".parse().unwrap();
    assert_eq!(cfg.custom.history_bits, 10);
}

#[rstest]
#[case("static:4")]
#[case("gshare:x")]
#[case("gshare:12:3")]
#[case("tournament:1:2:3")]
#[case("custom:-1")]
fn test_selector_malformed(#[case] selector: &str) {
    let err = selector.parse::<PredictorConfig>().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSelector(_)));
}

#[test]
fn test_selector_unknown_strategy() {
    let err = "perceptron:10".parse::<PredictorConfig>().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownStrategy(s) if s == "perceptron"));
}

#[test]
fn test_selector_display() {
    assert_eq!(PredictorConfig::new(Strategy::Static).to_string(), "Static");
    assert_eq!(PredictorConfig::new(Strategy::GShare).to_string(), "Gshare:14");
    assert_eq!(
        PredictorConfig::new(Strategy::Tournament).to_string(),
        "Tournament:12:10"
    );
    assert_eq!(PredictorConfig::new(Strategy::Custom).to_string(), "Custom:12");

    let cfg: PredictorConfig = "tournament:9:8".parse().unwrap();
    let reparsed: PredictorConfig = cfg.to_string().parse().unwrap();
    assert_eq!(reparsed, cfg);
}

#[test]
fn test_error_messages() {
    let err = GShareConfig { history_bits: 40 }.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "gshare history width of 40 bits is out of range (expected 1..=30)"
    );
}
