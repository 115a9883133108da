//! Serializable, point-in-time copies of instrument state.
//!
//! Exporters read these instead of holding instrument locks. Timer
//! timestamps are reported as nanoseconds since the Unix epoch.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::kind::MetricKind;
use crate::tag::Tags;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SnapshotValue {
    Counter {
        value: i64,
    },
    Gauge {
        value: f64,
    },
    Timer {
        started_unix_nanos: Option<u64>,
        stopped_unix_nanos: Option<u64>,
    },
    Event {
        last_sent: String,
    },
}

impl SnapshotValue {
    pub fn kind(&self) -> MetricKind {
        match self {
            SnapshotValue::Counter { .. } => MetricKind::Counter,
            SnapshotValue::Gauge { .. } => MetricKind::Gauge,
            SnapshotValue::Timer { .. } => MetricKind::Timer,
            SnapshotValue::Event { .. } => MetricKind::Event,
        }
    }

    pub(crate) fn timer((started, stopped): (Option<SystemTime>, Option<SystemTime>)) -> Self {
        SnapshotValue::Timer {
            started_unix_nanos: started.and_then(unix_nanos),
            stopped_unix_nanos: stopped.and_then(unix_nanos),
        }
    }
}

/// Pre-epoch times and times past u64 nanoseconds map to `None`.
fn unix_nanos(t: SystemTime) -> Option<u64> {
    let d = t.duration_since(UNIX_EPOCH).ok()?;
    u64::try_from(d.as_nanos()).ok()
}

/// Serializes flat: `{"kind": "counter", "value": 3, "tags": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstrumentSnapshot {
    #[serde(flatten)]
    pub value: SnapshotValue,
    pub tags: Tags,
}

impl InstrumentSnapshot {
    pub fn kind(&self) -> MetricKind {
        self.value.kind()
    }
}

/// A registry entry: name plus instrument state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSnapshot {
    pub name: String,
    #[serde(flatten)]
    pub instrument: InstrumentSnapshot,
}
