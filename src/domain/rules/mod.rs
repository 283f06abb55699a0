// Domain rules - Interval set policies

use crate::domain::errors::*;
use crate::domain::model::*;

/// Rules governing which removal intervals may coexist and be processed
pub struct IntervalPolicy;

impl IntervalPolicy {
    /// Reject `candidate` if it intersects any of `existing`.
    ///
    /// Reports the first conflicting interval in iteration order.
    pub fn check_disjoint<'a, I>(
        candidate: &RemovalInterval,
        existing: I,
    ) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = &'a RemovalInterval>,
    {
        match existing.into_iter().find(|other| candidate.overlaps(other)) {
            Some(other) => Err(DomainError::Overlap {
                candidate: *candidate,
                existing: *other,
            }),
            None => Ok(()),
        }
    }

    /// Processing policy: at least one interval must be queued
    pub fn require_intervals(intervals: &[RemovalInterval]) -> Result<(), DomainError> {
        if intervals.is_empty() {
            return Err(DomainError::EmptyIntervalSet);
        }
        Ok(())
    }

    /// True when intervals are sorted by start and pairwise non-overlapping
    pub fn is_sorted_and_disjoint(intervals: &[RemovalInterval]) -> bool {
        intervals
            .windows(2)
            .all(|pair| pair[0].end() <= pair[1].start())
    }

    /// Total removed time in seconds
    pub fn removed_seconds(intervals: &[RemovalInterval]) -> f64 {
        intervals.iter().map(RemovalInterval::duration).sum()
    }
}
