// Chunk: docs/chunks/span_problem_flags - Diagnostic severity bits on spans

//! Diagnostic severity flags attached to highlight spans.
//!
//! A span can sit inside several diagnostic regions at once (an error that is
//! also deprecated, say), so severities are independent bits rather than an
//! enum. The bit values match the ones the renderer already keys its squiggle
//! colors on.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Bitmask of diagnostic severities covering a span.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProblemFlags(u8);

impl ProblemFlags {
    /// The span is inside an ERROR region.
    pub const ERROR: ProblemFlags = ProblemFlags(1 << 4);
    /// The span is inside a WARNING region.
    pub const WARNING: ProblemFlags = ProblemFlags(1 << 3);
    /// The span is inside an INFO region.
    pub const INFO: ProblemFlags = ProblemFlags(1 << 2);
    /// The span is inside a HINT region.
    pub const HINT: ProblemFlags = ProblemFlags(1 << 1);
    /// The span is inside a DEPRECATED region.
    pub const DEPRECATED: ProblemFlags = ProblemFlags(1);

    const ALL: u8 = 0b1_1111;

    const NAMES: [(ProblemFlags, &'static str); 5] = [
        (ProblemFlags::ERROR, "ERROR"),
        (ProblemFlags::WARNING, "WARNING"),
        (ProblemFlags::INFO, "INFO"),
        (ProblemFlags::HINT, "HINT"),
        (ProblemFlags::DEPRECATED, "DEPRECATED"),
    ];

    /// No severities set.
    pub const fn empty() -> Self {
        ProblemFlags(0)
    }

    /// Builds flags from raw bits, dropping bits that name no severity.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        ProblemFlags(bits & Self::ALL)
    }

    /// Raw bit representation.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if no severity is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every bit of `other` is set in `self`.
    pub const fn contains(self, other: ProblemFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Sets the bits of `other`.
    pub fn insert(&mut self, other: ProblemFlags) {
        self.0 |= other.0;
    }

    /// Clears the bits of `other`.
    pub fn remove(&mut self, other: ProblemFlags) {
        self.0 &= !other.0;
    }
}

impl BitOr for ProblemFlags {
    type Output = ProblemFlags;

    fn bitor(self, rhs: ProblemFlags) -> ProblemFlags {
        ProblemFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for ProblemFlags {
    fn bitor_assign(&mut self, rhs: ProblemFlags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ProblemFlags {
    type Output = ProblemFlags;

    fn bitand(self, rhs: ProblemFlags) -> ProblemFlags {
        ProblemFlags(self.0 & rhs.0)
    }
}

impl fmt::Debug for ProblemFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("ProblemFlags(empty)");
        }
        f.write_str("ProblemFlags(")?;
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}
