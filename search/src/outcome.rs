//! Search outcome type and the legacy sentinel adapter.

/// Sentinel value meaning "absent" in the flat `i64` encoding.
///
/// Kept only for callers that need bit-compatibility with the historical
/// integer-returning surface; new code should match on [`SearchOutcome`].
pub const SENTINEL_ABSENT: i64 = -1;

/// Result of a membership query on a sorted sequence.
///
/// `Found(i)` guarantees `sequence[i] == key` for the call that produced it.
/// `Absent` guarantees no position holds the key. There is no third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The key was found at this index.
    Found(usize),
    /// No position in the sequence holds the key.
    Absent,
}

impl SearchOutcome {
    /// The found index, or `None` for `Absent`.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Found(i) => Some(i),
            Self::Absent => None,
        }
    }

    /// Returns `true` if the key was found.
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns `true` if no position holds the key.
    #[must_use]
    pub const fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Flatten to the legacy encoding: the index widened to `i64`, or
    /// [`SENTINEL_ABSENT`].
    ///
    /// # Panics
    ///
    /// Panics if the found index exceeds `i64::MAX`, which no real slice can
    /// reach.
    #[must_use]
    pub fn to_sentinel(self) -> i64 {
        match self {
            Self::Found(i) => i64::try_from(i).expect("slice index exceeds i64 range"),
            Self::Absent => SENTINEL_ABSENT,
        }
    }

    /// Lift the legacy encoding back into the sum type.
    ///
    /// Any negative value reads as `Absent`, matching the historical
    /// contract where every negative return meant "not present".
    #[must_use]
    pub fn from_sentinel(raw: i64) -> Self {
        usize::try_from(raw).map_or(Self::Absent, Self::Found)
    }
}
