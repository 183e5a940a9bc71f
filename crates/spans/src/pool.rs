// Chunk: docs/chunks/span_pool - Recycled highlight spans
//!
//! Bounded free list of retired spans.
//!
//! Every keystroke and scroll re-highlights the visible lines, producing a
//! few thousand spans per pass. `SpanPool` keeps the spans of the previous
//! pass around so the next pass reuses their allocations instead of hitting
//! the allocator on the hot path.
//!
//! # Design
//!
//! - **Bounded**: the pool holds at most `capacity` spans. Returning a span to
//!   a full pool fails and the span is dropped; the pool never grows. A
//!   zero-capacity pool holds nothing and every acquire allocates.
//! - **Non-blocking**: both [`SpanPool::try_take`] and [`SpanPool::try_put`]
//!   are lock-free (`ArrayQueue` uses CAS). Nothing waits for the pool to
//!   fill or drain.
//! - **Unordered**: any retired span is as good as another; no reuse order is
//!   promised.
//! - **Owned, not global**: the highlighter owns the pool and shares it with
//!   the tokenizer thread through an `Arc`.
//!
//! A successful put followed by a take on another thread is a
//! release/acquire hand-off: every field written before the put is visible to
//! the taker.

use std::fmt;

use crossbeam_queue::ArrayQueue;

use crate::config::SpanPoolConfig;
use crate::span::Span;
use crate::stats::{PoolCounters, PoolStats};

/// Pool size used by [`SpanPool::default`]: two full screens of spans with slack.
pub const DEFAULT_CAPACITY: usize = 16384;

/// Thread-safe, fixed-capacity pool of reusable [`Span`]s.
pub struct SpanPool<R = ()> {
    /// `None` when the capacity is zero (`ArrayQueue` needs at least one slot).
    free: Option<ArrayQueue<Box<Span<R>>>>,
    counters: PoolCounters,
}

impl<R> SpanPool<R> {
    /// Creates an empty pool that holds at most `capacity` retired spans.
    ///
    /// With a capacity of zero every return is rejected.
    pub fn new(capacity: usize) -> Self {
        tracing::debug!(capacity, "creating span pool");
        Self {
            free: (capacity > 0).then(|| ArrayQueue::new(capacity)),
            counters: PoolCounters::default(),
        }
    }

    /// Creates an empty pool sized by `config`.
    pub fn with_config(config: &SpanPoolConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Maximum number of retired spans this pool holds.
    pub fn capacity(&self) -> usize {
        self.free.as_ref().map_or(0, ArrayQueue::capacity)
    }

    /// Number of retired spans currently held.
    pub fn len(&self) -> usize {
        self.free.as_ref().map_or(0, ArrayQueue::len)
    }

    /// Returns true if no retired span is available.
    pub fn is_empty(&self) -> bool {
        self.free.as_ref().map_or(true, ArrayQueue::is_empty)
    }

    /// Returns true if a return would be rejected right now.
    pub fn is_full(&self) -> bool {
        self.free.as_ref().map_or(true, ArrayQueue::is_full)
    }

    /// Takes an arbitrary retired span, or `None` if the pool is empty.
    ///
    /// The span comes back exactly as it was released. Use
    /// [`SpanPool::acquire`] to get a span ready for a new owner.
    pub fn try_take(&self) -> Option<Box<Span<R>>> {
        self.free.as_ref().and_then(ArrayQueue::pop)
    }

    /// Stores `span` if there is room.
    ///
    /// On a full pool the span is handed back untouched.
    pub fn try_put(&self, span: Box<Span<R>>) -> Result<(), Box<Span<R>>> {
        match &self.free {
            Some(free) => free.push(span),
            None => Err(span),
        }
    }

    /// Returns a span starting at `(line, column)` with `color_id`.
    ///
    /// Reuses a retired span when one is available and allocates otherwise.
    /// The span has no underline, no problem flags and no problem range.
    pub fn acquire(&self, line: usize, column: usize, color_id: u32) -> Box<Span<R>> {
        match self.try_take() {
            Some(mut span) => {
                self.counters.record_hit();
                span.reuse(line, column, color_id);
                span
            }
            None => {
                self.counters.record_miss();
                Span::fresh(line, column, color_id)
            }
        }
    }

    /// Returns `span` to the pool.
    ///
    /// Clears `color_id`, `column` and `underline_color` before offering it.
    /// Returns false if the pool was full; the span is then dropped.
    pub fn release(&self, mut span: Box<Span<R>>) -> bool {
        span.clear_for_release();
        match self.try_put(span) {
            Ok(()) => {
                self.counters.record_returned();
                true
            }
            Err(_dropped) => {
                self.counters.record_rejected();
                tracing::trace!(capacity = self.capacity(), "span pool full, dropping span");
                false
            }
        }
    }

    /// Releases `spans` in order, stopping at the first rejected release.
    ///
    /// Once the pool reports full, the rest of the batch would be rejected as
    /// well, so the remaining spans are dropped without being offered.
    /// Returns the number of spans the pool accepted.
    pub fn release_all<I>(&self, spans: I) -> usize
    where
        I: IntoIterator<Item = Box<Span<R>>>,
    {
        let mut accepted = 0;
        for span in spans {
            if !self.release(span) {
                tracing::debug!(accepted, "span pool full, dropping rest of batch");
                break;
            }
            accepted += 1;
        }
        accepted
    }

    /// Snapshot of the reuse counters.
    pub fn stats(&self) -> PoolStats {
        self.counters.snapshot(self.capacity(), self.len())
    }
}

impl<R> Default for SpanPool<R> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<R> fmt::Debug for SpanPool<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpanPool")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish()
    }
}
