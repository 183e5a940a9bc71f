// Chunk: docs/chunks/span_pool - Recycled highlight spans
//!
//! The span record produced by a highlighting pass.
//!
//! A [`Span`] marks where a styled run starts (line, column) and how it is
//! styled (an opaque color id from the active color scheme, an optional
//! underline color, and diagnostic severities). The run extends to the start
//! of the next span on the line; ordering is the highlighter's business.
//!
//! Spans are always handed out boxed by a [`SpanPool`], so that returning one
//! to the pool recycles the allocation instead of freeing it.

use std::sync::{Arc, Weak};

use crate::flags::ProblemFlags;
use crate::pool::SpanPool;

/// One styled run of text.
///
/// `R` is the diagnostic range type of the hosting editor. A span only
/// references its range weakly: the diagnostics layer owns it.
#[derive(Debug)]
pub struct Span<R = ()> {
    /// Start line (0-indexed).
    pub line: usize,
    /// Start column (0-indexed).
    pub column: usize,
    /// Color classification in the editor's color scheme.
    pub color_id: u32,
    /// Packed underline color. Zero means no underline.
    pub underline_color: u32,
    /// Diagnostic severities covering this span.
    pub problem_flags: ProblemFlags,
    /// The diagnostic range this span belongs to, if any.
    pub problem_range: Option<Weak<R>>,
}

impl<R> Span<R> {
    /// Allocates a span with no underline and no diagnostics.
    ///
    /// Only the pool calls this, on a miss.
    pub(crate) fn fresh(line: usize, column: usize, color_id: u32) -> Box<Self> {
        Box::new(Self {
            line,
            column,
            color_id,
            underline_color: 0,
            problem_flags: ProblemFlags::empty(),
            problem_range: None,
        })
    }

    /// Prepares a retired span for its next owner.
    pub(crate) fn reuse(&mut self, line: usize, column: usize, color_id: u32) {
        self.line = line;
        self.column = column;
        self.color_id = color_id;
        self.underline_color = 0;
        self.problem_flags = ProblemFlags::empty();
        self.problem_range = None;
    }

    /// Clears the fields a release is documented to clear.
    ///
    /// `line`, `problem_flags` and `problem_range` survive until the next
    /// acquire overwrites them.
    pub(crate) fn clear_for_release(&mut self) {
        self.color_id = 0;
        self.column = 0;
        self.underline_color = 0;
    }

    /// Sets the underline color. Zero removes the underline.
    ///
    /// The value is a packed color, not a color-scheme id; it is stored as-is.
    pub fn set_underline_color(&mut self, color: u32) -> &mut Self {
        self.underline_color = color;
        self
    }

    /// Sets the start column.
    pub fn set_column(&mut self, column: usize) -> &mut Self {
        self.column = column;
        self
    }

    /// Returns the start column.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the start position as `(line, column)`.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Returns true if this span draws an underline.
    pub fn has_underline(&self) -> bool {
        self.underline_color != 0
    }

    /// Returns true if all bits of `flag` are set on this span.
    pub fn has_problem(&self, flag: ProblemFlags) -> bool {
        self.problem_flags.contains(flag)
    }

    // Chunk: docs/chunks/span_problem_flags - Attach diagnostics to spans
    /// Marks this span as covered by a diagnostic.
    ///
    /// Severities accumulate across calls. The range is held weakly and
    /// replaces any previously attached range.
    pub fn mark_problem(&mut self, flags: ProblemFlags, range: &Arc<R>) -> &mut Self {
        self.problem_flags |= flags;
        self.problem_range = Some(Arc::downgrade(range));
        self
    }

    /// Returns the attached diagnostic range if it is still alive.
    pub fn problem_range(&self) -> Option<Arc<R>> {
        self.problem_range.as_ref().and_then(Weak::upgrade)
    }

    /// Makes an independent copy of this span, drawn from `pool`.
    ///
    /// Position, color id and underline are copied. Diagnostic flags and the
    /// diagnostic range are not: the copy starts with none.
    pub fn copy(&self, pool: &SpanPool<R>) -> Box<Span<R>> {
        let mut copy = pool.acquire(self.line, self.column, self.color_id);
        copy.set_underline_color(self.underline_color);
        copy
    }

    /// Returns this span to `pool`.
    ///
    /// Clears `color_id`, `column` and `underline_color`, then offers the span
    /// to the pool. Returns false if the pool is full, in which case the span
    /// is dropped.
    pub fn release(self: Box<Self>, pool: &SpanPool<R>) -> bool {
        pool.release(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Diagnostic {
        message: &'static str,
    }

    #[test]
    fn test_fresh_span_has_no_decorations() {
        let span: Box<Span> = Span::fresh(3, 7, 12);
        assert_eq!(span.position(), (3, 7));
        assert_eq!(span.color_id, 12);
        assert!(!span.has_underline());
        assert!(span.problem_flags.is_empty());
        assert!(span.problem_range.is_none());
    }

    #[test]
    fn test_setters_chain() {
        let mut span: Box<Span> = Span::fresh(0, 0, 1);
        span.set_underline_color(0xFFFF_0000).set_column(9);
        assert_eq!(span.column(), 9);
        assert_eq!(span.underline_color, 0xFFFF_0000);
        assert!(span.has_underline());
    }

    #[test]
    fn test_mark_problem_accumulates_flags() {
        let diag = Arc::new(Diagnostic { message: "unused variable" });
        let mut span = Span::fresh(1, 4, 2);
        span.mark_problem(ProblemFlags::WARNING, &diag)
            .mark_problem(ProblemFlags::DEPRECATED, &diag);

        assert!(span.has_problem(ProblemFlags::WARNING | ProblemFlags::DEPRECATED));
        assert!(!span.has_problem(ProblemFlags::ERROR));
        let range = span.problem_range().unwrap();
        assert_eq!(range.message, "unused variable");
    }

    #[test]
    fn test_problem_range_is_not_kept_alive() {
        let diag = Arc::new(Diagnostic { message: "gone" });
        let mut span = Span::fresh(0, 0, 0);
        span.mark_problem(ProblemFlags::ERROR, &diag);
        drop(diag);

        assert!(span.problem_range().is_none());
        assert!(span.has_problem(ProblemFlags::ERROR));
    }

    #[test]
    fn test_clear_for_release_keeps_line_and_flags() {
        let diag = Arc::new(Diagnostic { message: "kept" });
        let mut span = Span::fresh(5, 3, 2);
        span.set_underline_color(7);
        span.mark_problem(ProblemFlags::INFO, &diag);

        span.clear_for_release();

        assert_eq!(span.line, 5);
        assert_eq!(span.column, 0);
        assert_eq!(span.color_id, 0);
        assert_eq!(span.underline_color, 0);
        assert_eq!(span.problem_flags, ProblemFlags::INFO);
        assert!(span.problem_range().is_some());
    }

    #[test]
    fn test_reuse_resets_everything_but_the_new_position() {
        let diag = Arc::new(Diagnostic { message: "stale" });
        let mut span = Span::fresh(5, 3, 2);
        span.mark_problem(ProblemFlags::ERROR, &diag);
        span.clear_for_release();

        span.reuse(10, 1, 9);

        assert_eq!(span.position(), (10, 1));
        assert_eq!(span.color_id, 9);
        assert!(span.problem_flags.is_empty());
        assert!(span.problem_range.is_none());
    }
}
