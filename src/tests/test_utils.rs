//! Shared test utilities for Snowflake tests

use std::collections::HashSet;

use crate::{Clock, SystemClock};

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[u64], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that IDs are strictly increasing in the order given
pub fn assert_ids_monotonic(ids: &[u64]) {
    for (i, pair) in ids.windows(2).enumerate() {
        assert!(
            pair[1] > pair[0],
            "ID at position {} ({}) is not greater than previous ID ({})",
            i + 1,
            pair[1],
            pair[0]
        );
    }
}

/// Assert collection has expected unique count and is strictly increasing once sorted
pub fn assert_unique_and_monotonic(mut ids: Vec<u64>, expected_count: usize) {
    assert_unique_ids(&ids, expected_count);
    ids.sort_unstable();
    assert_ids_monotonic(&ids);
}

/// Current wall clock in Unix milliseconds
pub fn wall_clock_ms() -> u64 {
    SystemClock.now_millis()
}

/// Assert an absolute timestamp is within `tolerance_ms` of the wall clock
pub fn assert_timestamp_accurate(timestamp_ms: u64, tolerance_ms: u64) {
    let now = wall_clock_ms();
    let drift = now.abs_diff(timestamp_ms);
    assert!(
        drift <= tolerance_ms,
        "Timestamp {} drifts {}ms from wall clock {}",
        timestamp_ms,
        drift,
        now
    );
}
