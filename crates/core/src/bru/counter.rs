//! Two-bit saturating counter.
//!
//! Every table entry of every predictor is one of these four states. The state machine is
//! closed: there is no representation for an undefined counter, so reads never need a
//! fallback path.

/// A 2-bit saturating confidence counter.
///
/// States are ordered from strongest not-taken to strongest taken, so `a < b` means `a`
/// leans further toward not-taken than `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Counter {
    /// Strongly not-taken (saturated bottom).
    StronglyNotTaken = 0,
    /// Weakly not-taken; the reset state of every table.
    #[default]
    WeaklyNotTaken = 1,
    /// Weakly taken.
    WeaklyTaken = 2,
    /// Strongly taken (saturated top).
    StronglyTaken = 3,
}

impl Counter {
    /// All four states in ascending order.
    pub const ALL: [Self; 4] = [
        Self::StronglyNotTaken,
        Self::WeaklyNotTaken,
        Self::WeaklyTaken,
        Self::StronglyTaken,
    ];

    /// Returns the state after observing `taken`.
    ///
    /// A taken outcome moves one step toward [`Counter::StronglyTaken`], a not-taken outcome
    /// one step toward [`Counter::StronglyNotTaken`]; both saturate.
    #[inline(always)]
    pub const fn next_state(self, taken: bool) -> Self {
        match (self, taken) {
            (Self::StronglyNotTaken, true) => Self::WeaklyNotTaken,
            (Self::WeaklyNotTaken, true) => Self::WeaklyTaken,
            (Self::WeaklyTaken | Self::StronglyTaken, true) => Self::StronglyTaken,
            (Self::StronglyTaken, false) => Self::WeaklyTaken,
            (Self::WeaklyTaken, false) => Self::WeaklyNotTaken,
            (Self::WeaklyNotTaken | Self::StronglyNotTaken, false) => Self::StronglyNotTaken,
        }
    }

    /// Applies [`Counter::next_state`] in place.
    #[inline(always)]
    pub const fn update(&mut self, taken: bool) {
        *self = self.next_state(taken);
    }

    /// The direction this state predicts: taken iff weakly or strongly taken.
    #[inline(always)]
    pub const fn predict(self) -> bool {
        matches!(self, Self::WeaklyTaken | Self::StronglyTaken)
    }

    /// The counter's vote in a majority decision: `+1` for taken, `-1` for not-taken.
    #[inline(always)]
    pub const fn vote(self) -> i32 {
        if self.predict() { 1 } else { -1 }
    }
}

