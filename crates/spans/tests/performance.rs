// Chunk: docs/chunks/span_pool - Recycled highlight spans

//! Performance sanity checks for span reuse.
//!
//! These tests verify that a steady stream of highlighting passes completes
//! within reasonable time bounds and stops allocating once the pool is warm.
//! They are not formal benchmarks but guard against obvious regressions.

use std::sync::Arc;
use std::time::{Duration, Instant};

use lite_edit_spans::{SpanBatch, SpanPool};

/// A 60-line viewport with ~40 spans per line.
const SPANS_PER_PASS: usize = 60 * 40;

fn highlight_pass(pool: &Arc<SpanPool>, pass: usize) -> SpanBatch {
    let mut batch = SpanBatch::with_capacity(Arc::clone(pool), SPANS_PER_PASS);
    for line in 0..60 {
        for token in 0..40 {
            batch.push_span(pass + line, token * 4, (token % 12) as u32);
        }
    }
    batch
}

#[test]
fn warm_pool_stops_allocating() {
    let pool: Arc<SpanPool> = Arc::new(SpanPool::default());
    let mut current = highlight_pass(&pool, 0);

    for pass in 1..50 {
        let next = highlight_pass(&pool, pass);
        current.replace_with(next);
    }

    let stats = pool.stats();
    // Only the first two passes allocate: the second pass runs while the
    // first one is still on screen.
    assert_eq!(stats.misses as usize, 2 * SPANS_PER_PASS);
    assert_eq!(stats.rejected, 0);
    assert!(stats.hit_rate() > 0.9, "{}", stats.report());
}

#[test]
fn two_hundred_passes_under_1s() {
    let pool: Arc<SpanPool> = Arc::new(SpanPool::default());
    let mut current = highlight_pass(&pool, 0);
    let start = Instant::now();

    for pass in 1..200 {
        let next = highlight_pass(&pool, pass);
        current.replace_with(next);
    }

    let elapsed = start.elapsed();
    assert!(
        elapsed < Duration::from_secs(1),
        "200 highlighting passes took {:?}, expected < 1s",
        elapsed
    );
}
