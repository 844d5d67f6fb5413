//! Stale-invocation guard for overlapping pipeline runs.

use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying one pipeline invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// Monotonic invocation counter ensuring only the most recent run's result
/// is observed.
///
/// Rapid re-selection can leave an older decode in flight when a newer one
/// starts; without a guard, whichever finishes last wins. Each invocation
/// claims a [`Generation`] up front and its result is admitted only while
/// no newer generation exists, making the outcome latest-by-invocation
/// rather than latest-by-completion.
#[derive(Debug, Default)]
pub struct UploadSequence {
    latest: AtomicU64,
}

impl UploadSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next generation, invalidating all prior ones.
    pub fn begin(&self) -> Generation {
        Generation(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `generation` is still the newest invocation.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest.load(Ordering::Acquire) == generation.0
    }

    /// Keep `value` only if `generation` is still current.
    pub fn admit<T>(&self, generation: Generation, value: T) -> Option<T> {
        self.is_current(generation).then_some(value)
    }
}
