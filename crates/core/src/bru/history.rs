//! Branch outcome history register.

/// Returns a mask selecting the low `bits` bits of a 64-bit value.
#[inline(always)]
pub const fn low_mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Shift register of branch outcomes, most recent outcome in bit 0.
///
/// The register is conceptually unbounded: older outcomes shift out of the top of the
/// 64-bit word, and consumers only ever read a masked low slice of it, so it is never
/// truncated on update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryRegister(u64);

impl HistoryRegister {
    /// Creates an empty (all not-taken) history.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates a history holding `bits` directly.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Shifts `taken` in as the newest outcome.
    #[inline(always)]
    pub const fn push(&mut self, taken: bool) {
        self.0 = (self.0 << 1) | taken as u64;
    }

    /// The low `bits` outcomes.
    #[inline(always)]
    pub const fn low_bits(self, bits: u32) -> u64 {
        self.0 & low_mask(bits)
    }

    /// The whole register.
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }
}
