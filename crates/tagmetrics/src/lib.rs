//! Top-level facade crate for tagmetrics.
//!
//! Re-exports the core types and the recorder so users can depend on a single crate.

pub mod core {
    pub use tagmetrics_core::*;
}

pub mod recorder {
    pub use tagmetrics_recorder::*;
}

pub use tagmetrics_core::{
    Counter, Event, Gauge, Instrument, MetricKind, MetricsError, Result, Tag, Tagged, Tags, Timer,
};
pub use tagmetrics_recorder::Recorder;
