//! Search entry points and the window walk.

use std::cmp::Ordering;

use crate::error::SearchError;
use crate::outcome::SearchOutcome;
use crate::probe::{ProbeEventV1, ProbeTraceV1, ProbeVerdictV1};
use crate::window::SearchWindow;

/// Locate `key` in a non-decreasingly sorted `sequence`.
///
/// Returns `Found(i)` with `sequence[i] == key` if the key is present,
/// otherwise `Absent`. When the key occurs more than once any matching
/// index may be returned. An empty sequence yields `Absent` without any
/// indexed access.
///
/// Precondition: `sequence` is sorted non-decreasingly. Sortedness is not
/// validated; the result on unsorted input is unspecified.
#[must_use]
pub fn find(sequence: &[i64], key: i64) -> SearchOutcome {
    walk(sequence, key, |_| {})
}

/// Like [`find`], but also returns the [`ProbeTraceV1`] audit trail of the
/// walk. Tracing is observation only: the outcome is identical to [`find`]
/// on the same inputs.
#[must_use]
pub fn find_traced(sequence: &[i64], key: i64) -> (SearchOutcome, ProbeTraceV1) {
    let mut events = Vec::new();
    let outcome = walk(sequence, key, |event| events.push(event));
    let trace = ProbeTraceV1 {
        sequence_len: sequence.len() as u64,
        key,
        events,
        outcome,
    };
    (outcome, trace)
}

/// Checked entry point for callers holding a possibly-missing sequence view.
///
/// A missing sequence is an invalid argument, not a failed lookup: it must
/// never read as `Absent`.
///
/// # Errors
///
/// Returns [`SearchError::MissingSequence`] if `sequence` is `None`. No
/// probe is performed in that case.
pub fn find_checked(sequence: Option<&[i64]>, key: i64) -> Result<SearchOutcome, SearchError> {
    let sequence = sequence.ok_or(SearchError::MissingSequence)?;
    Ok(find(sequence, key))
}

/// Thin adapter over [`find`] for callers that need the flat legacy
/// encoding: the found index widened to `i64`, or −1 for absent.
#[must_use]
pub fn find_sentinel(sequence: &[i64], key: i64) -> i64 {
    find(sequence, key).to_sentinel()
}

/// The window walk shared by all entry points.
///
/// Each iteration probes the midpoint of the remaining half-open window and
/// either terminates or shrinks the window by at least one index, so the
/// walk performs at most ⌈log₂(n+1)⌉ probes.
fn walk(sequence: &[i64], key: i64, mut on_probe: impl FnMut(ProbeEventV1)) -> SearchOutcome {
    let mut window = SearchWindow::full(sequence.len());
    while let Some(mid) = window.midpoint() {
        let probed = sequence[mid];
        let verdict = match probed.cmp(&key) {
            Ordering::Equal => ProbeVerdictV1::Equal,
            Ordering::Greater => ProbeVerdictV1::ProbedGreater,
            Ordering::Less => ProbeVerdictV1::ProbedLess,
        };
        on_probe(ProbeEventV1 {
            index: mid as u64,
            probed,
            verdict,
        });
        match verdict {
            ProbeVerdictV1::Equal => return SearchOutcome::Found(mid),
            ProbeVerdictV1::ProbedGreater => window = window.below(mid),
            ProbeVerdictV1::ProbedLess => window = window.above(mid),
        }
    }
    SearchOutcome::Absent
}
