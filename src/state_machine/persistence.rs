use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One applied transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord<S> {
    pub from: S,
    pub to: S,
    pub event: String,
    /// Monotonic position of this transition in the machine's lifetime
    pub sort_key: u64,
    pub most_recent: bool,
    pub transitioned_at: DateTime<Utc>,
}

/// Bounded, in-memory log of applied transitions
///
/// Oldest records are dropped once `limit` is reached. Sort keys keep
/// counting so they stay unique across trimming.
#[derive(Debug, Clone)]
pub struct TransitionHistory<S> {
    records: VecDeque<TransitionRecord<S>>,
    limit: usize,
    next_sort_key: u64,
}

impl<S: Copy> TransitionHistory<S> {
    pub fn new(limit: usize) -> Self {
        Self {
            records: VecDeque::new(),
            limit: limit.max(1),
            next_sort_key: 1,
        }
    }

    /// Append a transition and return the stored record
    pub fn record(&mut self, from: S, to: S, event: &str) -> &TransitionRecord<S> {
        if let Some(previous) = self.records.back_mut() {
            previous.most_recent = false;
        }

        let sort_key = self.next_sort_key;
        self.next_sort_key += 1;

        self.records.push_back(TransitionRecord {
            from,
            to,
            event: event.to_string(),
            sort_key,
            most_recent: true,
            transitioned_at: Utc::now(),
        });

        while self.records.len() > self.limit {
            self.records.pop_front();
        }

        &self.records[self.records.len() - 1]
    }

    /// Resolve the current state from recorded transitions
    ///
    /// Restores are recorded too, so this matches the owning machine's
    /// current state whenever anything has been recorded.
    pub fn resolve_current_state(&self) -> Option<S> {
        self.latest().map(|record| record.to)
    }

    pub fn latest(&self) -> Option<&TransitionRecord<S>> {
        self.records.back()
    }

    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord<S>> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Total transitions ever recorded, including trimmed ones
    pub fn total_recorded(&self) -> u64 {
        self.next_sort_key - 1
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
