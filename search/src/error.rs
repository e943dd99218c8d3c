//! Typed search errors.
//!
//! `SearchError` represents invalid-argument failures only. A key that is
//! simply not present is NOT an error — it is the `Absent` variant of
//! [`crate::outcome::SearchOutcome`], and callers must handle it without
//! treating it as exceptional.

/// Typed failure for an unusable sequence reference.
///
/// Returned before any probe is performed. Never produced for a key that is
/// merely absent; the two channels are deliberately distinct so a missing
/// sequence cannot masquerade as a failed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The caller supplied no sequence to index (`None` view).
    MissingSequence,
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSequence => {
                write!(f, "missing sequence reference: nothing to index")
            }
        }
    }
}

impl std::error::Error for SearchError {}
