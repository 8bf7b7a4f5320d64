use crate::ActivityRecord;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ACTIVITY_LOG_CAPACITY: usize = 10;

/// Most-recent-first list of collection activity, bounded by `capacity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    capacity: usize,
    records: VecDeque<ActivityRecord>,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            records: VecDeque::new(),
        }
    }

    /// Rebuilds a log from previously stored records (newest first),
    /// dropping whatever exceeds `capacity`.
    pub fn from_records(capacity: usize, records: Vec<ActivityRecord>) -> Self {
        let mut log = Self::new(capacity);
        log.records = records.into_iter().take(log.capacity).collect();
        log
    }

    pub fn push(&mut self, record: ActivityRecord) {
        self.records.push_front(record);
        self.records.truncate(self.capacity);
    }

    pub fn records(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&ActivityRecord> {
        self.records.front()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn to_vec(&self) -> Vec<ActivityRecord> {
        self.records.iter().cloned().collect()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITY_LOG_CAPACITY)
    }
}
