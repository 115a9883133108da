use std::sync::atomic::{AtomicU64, Ordering};

use crate::tag::{impl_tagged, Tag, TagList};

/// Last-write-wins floating point gauge.
///
/// The value is stored as raw `f64` bits so reads return exactly what was
/// written (no scaling).
#[derive(Debug)]
pub struct Gauge {
    bits: AtomicU64,
    tags: TagList,
}

impl Gauge {
    pub fn new(tags: &[Tag]) -> Self {
        Self {
            bits: AtomicU64::new(0f64.to_bits()),
            tags: TagList::new(tags),
        }
    }

    /// Replace the stored value.
    pub fn update(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Release);
    }

    pub fn value(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }
}

impl Default for Gauge {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl_tagged!(Gauge);
