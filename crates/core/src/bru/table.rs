//! Dense, power-of-two sized counter tables.
//!
//! Tables are allocated once when a predictor is built. Allocation goes through
//! `try_reserve_exact` so an oversized configuration surfaces as a [`ConfigError`] at startup
//! instead of aborting the process.

use crate::bru::counter::Counter;
use crate::common::ConfigError;

/// Allocates a table of `2^bits` copies of `init`.
///
/// # Arguments
///
/// * `table` - Name reported in the error if allocation fails.
/// * `bits` - log2 of the number of entries.
/// * `init` - Initial value of every entry.
///
/// # Errors
///
/// Returns [`ConfigError::Allocation`] if the allocator cannot satisfy the request.
pub fn alloc_table<T: Clone>(
    table: &'static str,
    bits: u32,
    init: T,
) -> Result<Vec<T>, ConfigError> {
    let entries = 1usize << bits;
    let mut data = Vec::new();
    data.try_reserve_exact(entries)
        .map_err(|source| ConfigError::Allocation {
            table,
            entries,
            source,
        })?;
    data.resize(entries, init);
    Ok(data)
}

/// A table of [`Counter`]s with `2^bits` entries, all starting weakly not-taken.
///
/// Callers compute indices already masked to the table width; an index beyond the table
/// is an invariant violation and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterTable {
    counters: Vec<Counter>,
    bits: u32,
}

impl CounterTable {
    /// Allocates a table of `2^bits` weakly not-taken counters.
    ///
    /// # Errors
    ///
    /// See [`alloc_table`].
    pub fn new(name: &'static str, bits: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            counters: alloc_table(name, bits, Counter::WeaklyNotTaken)?,
            bits,
        })
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Always false; tables hold at least one entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// log2 of the number of entries.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// The counter at `idx`.
    #[inline(always)]
    pub fn get(&self, idx: usize) -> Counter {
        debug_assert!(idx < self.counters.len(), "counter index {idx:#x} out of range");
        self.counters[idx]
    }

    /// Overwrites the counter at `idx`.
    #[inline(always)]
    pub fn set(&mut self, idx: usize, counter: Counter) {
        self.counters[idx] = counter;
    }

    /// The direction predicted by the counter at `idx`.
    #[inline(always)]
    pub fn predict(&self, idx: usize) -> bool {
        self.get(idx).predict()
    }

    /// Trains the counter at `idx` toward `taken`.
    #[inline(always)]
    pub fn update(&mut self, idx: usize, taken: bool) {
        self.counters[idx].update(taken);
    }

    /// All counters, in index order.
    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    /// Storage cost in bits (two per counter).
    pub fn storage_bits(&self) -> usize {
        self.counters.len() * 2
    }
}
