//! Keep-segment derivation

use crate::domain::model::{KeepSegment, RemovalInterval, TimeCode};
use crate::domain::rules::IntervalPolicy;

/// Compute the parts of the timeline that survive removing `intervals`.
///
/// `intervals` must be sorted by start and pairwise non-overlapping, which is
/// what [`IntervalStore::snapshot`](crate::domain::store::IntervalStore::snapshot)
/// returns. Anything else is a caller bug and panics.
///
/// The trailing segment is always emitted, even when it may turn out empty:
/// only the transcoder knows where the asset actually ends.
pub fn keep_segments(intervals: &[RemovalInterval]) -> Vec<KeepSegment> {
    assert!(
        IntervalPolicy::is_sorted_and_disjoint(intervals),
        "removal intervals must be sorted and non-overlapping"
    );

    let mut cursor = TimeCode::ZERO;
    let mut segments = Vec::with_capacity(intervals.len() + 1);

    for interval in intervals {
        // cursor == start means a contiguous removal; no zero-width segment
        if cursor < interval.start() {
            segments.push(KeepSegment::bounded(cursor, interval.start()));
        }
        cursor = interval.end();
    }

    segments.push(KeepSegment::trailing(cursor));
    segments
}
