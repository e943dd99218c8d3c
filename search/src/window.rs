//! Half-open candidate window for the search loop.
//!
//! The window is the index range `[low, high)` within which the key may
//! still reside. Using the half-open form (rather than the inclusive
//! `[low, high]` form) means the midpoint of a non-empty window is always a
//! valid sequence index, so out-of-range access is impossible by
//! construction and narrowing past index 0 never underflows.

/// The half-open index range `[low, high)` still under consideration.
///
/// Invariant: `low <= high` at all times. Each narrowing move shrinks the
/// window by at least one index, so a walk terminates in at most
/// ⌈log₂(n+1)⌉ midpoint probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    low: usize,
    high: usize,
}

impl SearchWindow {
    /// The full window over a sequence of `len` elements: `[0, len)`.
    #[must_use]
    pub const fn full(len: usize) -> Self {
        Self { low: 0, high: len }
    }

    /// Number of candidate indices remaining.
    #[must_use]
    pub const fn len(self) -> usize {
        self.high - self.low
    }

    /// Returns `true` if no candidate indices remain.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.low == self.high
    }

    /// The next probe index, or `None` if the window is empty.
    ///
    /// Computed as `low + (high − low) / 2`, which cannot overflow even for
    /// windows spanning the whole address space.
    #[must_use]
    pub const fn midpoint(self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.low + (self.high - self.low) / 2)
        }
    }

    /// Narrow to `[low, mid)` — the probed value was greater than the key,
    /// so `mid` and everything above it are ruled out.
    #[must_use]
    pub const fn below(self, mid: usize) -> Self {
        Self {
            low: self.low,
            high: mid,
        }
    }

    /// Narrow to `[mid + 1, high)` — the probed value was less than the
    /// key, so `mid` and everything below it are ruled out.
    #[must_use]
    pub const fn above(self, mid: usize) -> Self {
        Self {
            low: mid + 1,
            high: self.high,
        }
    }
}
