// Chunk: docs/chunks/span_batch - Per-pass span ownership
//!
//! The spans produced by one highlighting pass.
//!
//! A `SpanBatch` owns the spans it holds and the pool they came from. When
//! the next pass replaces it, or when the editor drops it, the spans go back
//! to the pool with [`SpanPool::release_all`], so callers never have to
//! remember to recycle.

use std::sync::Arc;

use crate::pool::SpanPool;
use crate::span::Span;

/// Spans of one highlighting pass, recycled into their pool when dropped.
pub struct SpanBatch<R = ()> {
    pool: Arc<SpanPool<R>>,
    spans: Vec<Box<Span<R>>>,
}

impl<R> SpanBatch<R> {
    /// Creates an empty batch drawing from `pool`.
    pub fn new(pool: Arc<SpanPool<R>>) -> Self {
        Self {
            pool,
            spans: Vec::new(),
        }
    }

    /// Creates an empty batch with room for `capacity` spans.
    pub fn with_capacity(pool: Arc<SpanPool<R>>, capacity: usize) -> Self {
        Self {
            pool,
            spans: Vec::with_capacity(capacity),
        }
    }

    /// The pool this batch draws from.
    pub fn pool(&self) -> &Arc<SpanPool<R>> {
        &self.pool
    }

    /// Acquires a span from the pool, appends it, and returns it for styling.
    pub fn push_span(&mut self, line: usize, column: usize, color_id: u32) -> &mut Span<R> {
        let span = self.pool.acquire(line, column, color_id);
        self.spans.push(span);
        let last = self.spans.len() - 1;
        &mut self.spans[last]
    }

    /// Appends an already-acquired span.
    pub fn push(&mut self, span: Box<Span<R>>) {
        self.spans.push(span);
    }

    /// The spans in insertion order.
    pub fn spans(&self) -> &[Box<Span<R>>] {
        &self.spans
    }

    /// Iterates the spans in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Span<R>> {
        self.spans.iter().map(|span| &**span)
    }

    /// Number of spans in the batch.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns true if the batch holds no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns every span to the pool and leaves the batch empty.
    ///
    /// Stops offering at the first rejected span; the rest are dropped.
    /// Returns the number of spans the pool accepted.
    pub fn recycle(&mut self) -> usize {
        if self.spans.is_empty() {
            return 0;
        }
        self.pool.release_all(self.spans.drain(..))
    }

    /// Recycles the current spans and takes over the spans of `next`.
    ///
    /// This is the hand-off between two highlighting passes. `next` must draw
    /// from the same pool; its spans are moved, not copied.
    pub fn replace_with(&mut self, mut next: SpanBatch<R>) -> usize {
        debug_assert!(Arc::ptr_eq(&self.pool, &next.pool));
        let accepted = self.recycle();
        std::mem::swap(&mut self.spans, &mut next.spans);
        accepted
    }

    /// Detaches the spans without recycling them.
    pub fn into_spans(mut self) -> Vec<Box<Span<R>>> {
        std::mem::take(&mut self.spans)
    }
}

impl<R> Drop for SpanBatch<R> {
    fn drop(&mut self) {
        self.recycle();
    }
}
