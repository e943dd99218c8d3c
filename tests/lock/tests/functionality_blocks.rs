//! Functionality lock tests: search behavior block by block.
//!
//! Covers the success path across positions, the failure path across key
//! ranges, iteration behavior, termination, the minimum-input boundary
//! cases, the large `2·i` fixture, and the legacy sentinel adapter.

use keyseek_search::search::{find, find_sentinel, find_traced};
use keyseek_search::{SearchOutcome, SENTINEL_ABSENT};
use lock_tests::{even_sequence, EVENS, ODDS};

#[test]
fn successful_search_across_positions() {
    assert_eq!(find(&ODDS, 1), SearchOutcome::Found(0));
    assert_eq!(find(&ODDS, 15), SearchOutcome::Found(7));
    assert_eq!(find(&ODDS, 7), SearchOutcome::Found(3));
}

#[test]
fn unsuccessful_search_across_key_ranges() {
    let seq = [1, 3, 5, 7, 9];
    assert_eq!(find(&seq, 4), SearchOutcome::Absent);
    assert_eq!(find(&seq, 0), SearchOutcome::Absent);
    assert_eq!(find(&seq, 10), SearchOutcome::Absent);
}

#[test]
fn iteration_behavior_single_and_multiple_probes() {
    // The first midpoint of [0, 8) is index 4, so key 9 resolves in one
    // probe; keys 3 and 13 need further narrowing.
    let (outcome, trace) = find_traced(&ODDS, 9);
    assert_eq!(outcome, SearchOutcome::Found(4));
    assert_eq!(trace.comparisons(), 1);

    let (outcome, trace) = find_traced(&ODDS, 3);
    assert_eq!(outcome, SearchOutcome::Found(1));
    assert!(trace.comparisons() > 1);

    let (outcome, trace) = find_traced(&ODDS, 13);
    assert_eq!(outcome, SearchOutcome::Found(6));
    assert!(trace.comparisons() > 1);
}

#[test]
fn boundary_conditions_empty_and_single() {
    assert_eq!(find(&[], 1), SearchOutcome::Absent);
    assert_eq!(find(&[5], 5), SearchOutcome::Found(0));
    assert_eq!(find(&[5], 3), SearchOutcome::Absent);
}

#[test]
fn position_coverage_first_last_middle() {
    assert_eq!(find(&EVENS, 2), SearchOutcome::Found(0));
    assert_eq!(find(&EVENS, 10), SearchOutcome::Found(4));
    assert_eq!(find(&EVENS, 6), SearchOutcome::Found(2));
}

#[test]
fn termination_early_mid_and_late() {
    assert_eq!(find(&ODDS, 0), SearchOutcome::Absent);
    assert_eq!(find(&ODDS, 8), SearchOutcome::Absent);
    assert_eq!(find(&ODDS, 16), SearchOutcome::Absent);
}

#[test]
fn large_fixture_pinned_results() {
    let seq = even_sequence(100);
    assert_eq!(find(&seq, 50), SearchOutcome::Found(25));
    assert_eq!(find(&seq, 0), SearchOutcome::Found(0));
    assert_eq!(find(&seq, 198), SearchOutcome::Found(99));
    assert_eq!(find(&seq, 199), SearchOutcome::Absent);
}

#[test]
fn sentinel_adapter_matches_legacy_encoding() {
    let seq = even_sequence(100);
    assert_eq!(find_sentinel(&seq, 50), 25);
    assert_eq!(find_sentinel(&seq, 199), SENTINEL_ABSENT);
    assert_eq!(find_sentinel(&[], 1), SENTINEL_ABSENT);
}
