//! Keyseek Search: deterministic binary search with auditable probe trace.
//!
//! This crate answers membership queries on a non-decreasingly sorted slice
//! of signed integers in O(log n) comparisons. The search itself is a pure
//! function: it borrows the sequence read-only, allocates nothing on the
//! plain path, and retains no state between calls.
//!
//! # Key types
//!
//! - [`SearchOutcome`] — `Found(index)` or `Absent`, plus the −1 sentinel
//!   adapter for bit-compatible callers
//! - [`SearchWindow`] — half-open candidate index range with overflow-safe
//!   midpoint selection
//! - [`ProbeTraceV1`] — append-only probe audit log with canonical JSON view
//!   and content digest
//! - [`SearchError`] — loud failure for a missing sequence reference
//!
//! # Entry points
//!
//! [`search::find`] is the plain operation. [`search::find_traced`] returns
//! the same outcome together with the probe trace. [`search::find_checked`]
//! accepts a possibly-missing sequence view and fails loudly instead of
//! reporting a false `Absent`. [`search::find_sentinel`] is the thin −1
//! adapter.

#![forbid(unsafe_code)]

pub mod error;
pub mod outcome;
pub mod probe;
pub mod search;
pub mod window;

pub use error::SearchError;
pub use outcome::{SearchOutcome, SENTINEL_ABSENT};
pub use probe::{ProbeEventV1, ProbeTraceV1, ProbeVerdictV1};
pub use window::SearchWindow;
