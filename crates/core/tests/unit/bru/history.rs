use bpsim_core::bru::history::{HistoryRegister, low_mask};

#[test]
fn push_places_newest_outcome_in_bit_zero() {
    let mut h = HistoryRegister::new();
    h.push(true);
    h.push(false);
    h.push(true);
    assert_eq!(h.bits(), 0b101);

    h.push(true);
    assert_eq!(h.bits(), 0b1011);
}

#[test]
fn low_bits_masks_older_outcomes() {
    let h = HistoryRegister::from_bits(0b1101_0110);
    assert_eq!(h.low_bits(4), 0b0110);
    assert_eq!(h.low_bits(1), 0);
    assert_eq!(h.low_bits(64), 0b1101_0110);
}

#[test]
fn register_is_not_truncated_on_push() {
    let mut h = HistoryRegister::new();
    for _ in 0..40 {
        h.push(true);
    }
    assert_eq!(h.bits(), (1u64 << 40) - 1);
}

#[test]
fn low_mask_edges() {
    assert_eq!(low_mask(0), 0);
    assert_eq!(low_mask(1), 1);
    assert_eq!(low_mask(14), 0x3FFF);
    assert_eq!(low_mask(64), u64::MAX);
}
