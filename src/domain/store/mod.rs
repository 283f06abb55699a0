// Interval store - Authoritative set of removal intervals for one asset

use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::IntervalPolicy;

/// Removal intervals for the current asset.
///
/// Entries keep insertion order for display. Every member is validated on
/// the way in, so any [`snapshot`](IntervalStore::snapshot) is sorted,
/// non-overlapping and made of non-empty intervals.
#[derive(Debug, Clone, Default)]
pub struct IntervalStore {
    entries: Vec<(IntervalId, RemovalInterval)>,
    next_id: u64,
}

impl IntervalStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and add an interval from user text.
    ///
    /// On any error the store is left unchanged.
    pub fn add(&mut self, start_text: &str, end_text: &str) -> Result<IntervalId, DomainError> {
        let interval = RemovalInterval::parse(start_text, end_text)?;
        self.insert(interval)
    }

    /// Add an already-built interval after the overlap check
    pub fn insert(&mut self, interval: RemovalInterval) -> Result<IntervalId, DomainError> {
        let existing = self.entries.iter().map(|(_, existing)| existing);
        IntervalPolicy::check_disjoint(&interval, existing)?;

        let id = IntervalId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, interval));
        debug!(%id, %interval, total = self.entries.len(), "Added removal interval");
        Ok(id)
    }

    /// Remove the interval with the given id; unknown ids are ignored
    pub fn remove(&mut self, id: IntervalId) -> Option<RemovalInterval> {
        let position = self.entries.iter().position(|(entry_id, _)| *entry_id == id)?;
        let (_, interval) = self.entries.remove(position);
        debug!(%id, %interval, "Removed removal interval");
        Some(interval)
    }

    /// Remove the interval at a display position; out-of-range is ignored
    pub fn remove_at(&mut self, index: usize) -> Option<RemovalInterval> {
        let id = self.entries.get(index).map(|(id, _)| *id)?;
        self.remove(id)
    }

    /// Drop every interval. Ids are never reused.
    pub fn clear(&mut self) {
        debug!(dropped = self.entries.len(), "Cleared removal intervals");
        self.entries.clear();
    }

    /// Intervals sorted by start time, freshly sorted on every call
    pub fn snapshot(&self) -> Vec<RemovalInterval> {
        let mut intervals: Vec<RemovalInterval> =
            self.entries.iter().map(|(_, interval)| *interval).collect();
        intervals.sort_by_key(|interval| interval.start());
        intervals
    }

    /// Look up an interval by id
    pub fn get(&self, id: IntervalId) -> Option<&RemovalInterval> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, interval)| interval)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (IntervalId, &RemovalInterval)> + '_ {
        self.entries.iter().map(|(id, interval)| (*id, interval))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
