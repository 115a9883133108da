use std::sync::atomic::{AtomicI64, Ordering};

use crate::tag::{impl_tagged, Tag, TagList};

/// Accumulating counter. Starts at zero and only moves by explicit deltas.
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicI64,
    tags: TagList,
}

impl Counter {
    pub fn new(tags: &[Tag]) -> Self {
        Self {
            value: AtomicI64::new(0),
            tags: TagList::new(tags),
        }
    }

    /// Increment by 1.
    pub fn inc(&self) {
        self.add(1);
    }

    /// Add a signed delta. Wraps on i64 overflow.
    pub fn add(&self, delta: i64) {
        self.value.fetch_add(delta, Ordering::Relaxed);
    }

    /// Total accumulated since creation.
    pub fn value(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }
}

impl_tagged!(Counter);
