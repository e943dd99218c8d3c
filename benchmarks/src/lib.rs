//! Shared helpers for keyseek benchmark suites.

#![forbid(unsafe_code)]

/// Build a sorted fixture of `len` even integers (`sequence[i] = 2·i`).
///
/// Odd keys are guaranteed absent, which gives the worst-case full-depth
/// walk for the miss benchmarks.
#[must_use]
pub fn even_fixture(len: i64) -> Vec<i64> {
    (0..len).map(|i| i * 2).collect()
}
