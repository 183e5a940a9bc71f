// Chunk: docs/chunks/span_pool_stats - Pool hit/miss counters
//!
//! Reuse counters for a [`SpanPool`](crate::SpanPool).
//!
//! The counters answer one question when tuning the pool size: are
//! highlighting passes still allocating? A healthy pool shows misses only for
//! the first few passes and almost no rejected returns.
//!
//! Counters use relaxed atomics. Under concurrent use a snapshot may be a few
//! operations stale; the numbers are advisory and never drive pool behavior.

use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters owned by a pool.
#[derive(Debug, Default)]
pub(crate) struct PoolCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    returned: AtomicU64,
    rejected: AtomicU64,
}

impl PoolCounters {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_returned(&self) {
        self.returned.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, capacity: usize, pooled: usize) -> PoolStats {
        PoolStats {
            capacity,
            pooled,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            returned: self.returned.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of a pool's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolStats {
    /// Maximum number of retired spans the pool holds.
    pub capacity: usize,
    /// Retired spans currently held.
    pub pooled: usize,
    /// Acquires served from the pool.
    pub hits: u64,
    /// Acquires that had to allocate.
    pub misses: u64,
    /// Returns the pool accepted.
    pub returned: u64,
    /// Returns refused because the pool was full.
    pub rejected: u64,
}

impl PoolStats {
    /// Fraction of acquires served from the pool, in `[0.0, 1.0]`.
    ///
    /// Returns 0.0 before the first acquire.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Formats the counters into a one-line human-readable report.
    pub fn report(&self) -> String {
        format!(
            "[lite-edit spans] pooled={}/{} hits={} misses={} hit_rate={:.1}% returned={} rejected={}",
            self.pooled,
            self.capacity,
            self.hits,
            self.misses,
            self.hit_rate() * 100.0,
            self.returned,
            self.rejected,
        )
    }
}
