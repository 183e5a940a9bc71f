// Chunk: docs/chunks/span_pool - Recycled highlight spans
// Chunk: docs/chunks/span_batch - Per-pass span ownership

//! lite-edit-spans: Pooled highlight spans for the lite-edit syntax layer.
//!
//! Re-highlighting the visible lines on every keystroke and scroll produces a
//! fresh set of spans each pass. This crate keeps those spans out of the
//! allocator by recycling them through a bounded, lock-free pool.
//!
//! # Overview
//!
//! - [`Span`]: one styled run (start line/column, color id, underline color,
//!   diagnostic flags, weak link to a diagnostic range).
//! - [`SpanPool`]: fixed-capacity free list shared between the tokenizer
//!   thread and the UI thread.
//! - [`SpanBatch`]: the spans of one highlighting pass; recycles them when
//!   replaced or dropped.
//! - [`SpanPoolConfig`]: pool sizing, loadable from `spans.json`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use lite_edit_spans::{SpanBatch, SpanPool};
//!
//! let pool: Arc<SpanPool> = Arc::new(SpanPool::new(1024));
//!
//! let mut pass = SpanBatch::new(Arc::clone(&pool));
//! pass.push_span(0, 0, 3);
//! pass.push_span(0, 6, 7).set_underline_color(0xFFFF_0000);
//! assert_eq!(pass.len(), 2);
//!
//! // The next pass reuses the spans of this one.
//! drop(pass);
//! assert_eq!(pool.len(), 2);
//! let span = pool.acquire(1, 0, 3);
//! assert_eq!(span.position(), (1, 0));
//! assert!(!span.has_underline());
//! ```
//!
//! # Release semantics
//!
//! Releasing a span clears its color id, column and underline color only.
//! Its line, problem flags and problem range stay as they were until the next
//! [`SpanPool::acquire`] hands it out again with everything but the new
//! position cleared. [`Span::copy`] likewise copies position, color id and
//! underline color, but never diagnostics.

mod batch;
mod config;
mod flags;
mod pool;
mod span;
mod stats;

pub use batch::SpanBatch;
pub use config::{ConfigError, SpanPoolConfig};
pub use flags::ProblemFlags;
pub use pool::{SpanPool, DEFAULT_CAPACITY};
pub use span::Span;
pub use stats::PoolStats;
