//! Tournament Predictor Tests.
//!
//! Covers the local history table, the local counter addressed by the updated pattern,
//! and the chooser, which only moves when exactly one component was right.

use bpsim_core::BranchPredictor;
use bpsim_core::bru::counter::Counter;
use bpsim_core::bru::tournament::TournamentPredictor;
use bpsim_core::common::ConfigError;
use bpsim_core::config::TournamentConfig;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::harness::train_n;

fn tournament(global_bits: u32, local_bits: u32) -> TournamentPredictor {
    TournamentPredictor::new(&TournamentConfig {
        global_bits,
        local_bits,
    })
    .unwrap()
}

#[test]
fn fresh_tables_match_widths() {
    let bp = TournamentPredictor::new(&TournamentConfig::default()).unwrap();
    assert_eq!(bp.global_table().len(), 1 << 12);
    assert_eq!(bp.choice_table().len(), 1 << 12);
    assert_eq!(bp.local_table().len(), 1 << 10);
    assert!(
        bp.choice_table()
            .counters()
            .iter()
            .all(|&c| c == Counter::WeaklyNotTaken)
    );
    assert!(!bp.predict(0xdead_beef));
}

#[rstest]
#[case(0, 10)]
#[case(31, 10)]
#[case(12, 0)]
#[case(12, 17)]
fn rejects_out_of_range_widths(#[case] global_bits: u32, #[case] local_bits: u32) {
    let err = TournamentPredictor::new(&TournamentConfig {
        global_bits,
        local_bits,
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::HistoryWidthOutOfRange { .. }));
}

// ══════════════════════════════════════════════════════════
// Local history
// ══════════════════════════════════════════════════════════

#[test]
fn local_history_keeps_low_bits_per_slot() {
    let mut bp = tournament(4, 3);
    for taken in [true, true, false, true] {
        bp.train(0x5, taken);
    }
    assert_eq!(bp.local_history(0x5), 0b101);

    // 0x5 + 8 aliases onto the same 3-bit slot.
    assert_eq!(bp.local_slot(0xD), bp.local_slot(0x5));
    assert_eq!(bp.local_history(0xD), 0b101);
    assert_eq!(bp.local_history(0x6), 0);
}

#[test]
fn local_counter_trained_at_new_pattern() {
    let mut bp = tournament(4, 4);
    bp.train(0x1, true);

    assert_eq!(bp.local_history(0x1), 0b1);
    assert_eq!(bp.local_table().get(0b1), Counter::WeaklyTaken);
    assert_eq!(bp.local_table().get(0), Counter::WeaklyNotTaken);
    assert_eq!(bp.global_table().get(0), Counter::WeaklyTaken);
    assert_eq!(bp.history().low_bits(4), 0b1);
}

// ══════════════════════════════════════════════════════════
// Chooser
// ══════════════════════════════════════════════════════════

#[test]
fn chooser_unchanged_when_both_wrong() {
    let mut bp = tournament(4, 4);
    assert!(!bp.global_prediction());
    assert!(!bp.local_prediction(0x3));

    bp.train(0x3, true);
    assert_eq!(bp.choice_table().get(0), Counter::WeaklyNotTaken);
}

#[test]
fn chooser_unchanged_when_both_right() {
    let mut bp = tournament(4, 4);
    train_n(&mut bp, 0x3, false, 5);
    assert!(
        bp.choice_table()
            .counters()
            .iter()
            .all(|&c| c == Counter::WeaklyNotTaken)
    );
}

#[test]
fn biased_branch_is_learned() {
    let mut bp = tournament(6, 6);
    train_n(&mut bp, 0x80, true, 12);
    assert!(bp.predict(0x80));
}

proptest! {
    /// Checks the prediction rule and the chooser update rule against every step of a
    /// random branch stream.
    #[test]
    fn chooser_follows_component_correctness(
        stream in prop::collection::vec((0u32..64, any::<bool>()), 1..400),
    ) {
        let mut bp = tournament(4, 4);
        for (pc, taken) in stream {
            let g_idx = bp.global_index();
            let global = bp.global_prediction();
            let local = bp.local_prediction(pc);
            let choice = bp.choice_table().get(g_idx);

            let expected = if choice.predict() { local } else { global };
            prop_assert_eq!(bp.predict(pc), expected);

            bp.train(pc, taken);

            let after = bp.choice_table().get(g_idx);
            match (local == taken, global == taken) {
                (true, false) => prop_assert_eq!(after, choice.next_state(true)),
                (false, true) => prop_assert_eq!(after, choice.next_state(false)),
                _ => prop_assert_eq!(after, choice),
            }
        }
    }
}
