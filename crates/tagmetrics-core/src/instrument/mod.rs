//! Metric instruments and the closed variant that carries any of them.
//!
//! A registry stores `Instrument`s by name. Callers that need a concrete type
//! go through `as_counter` / `as_gauge` / `as_timer` / `as_event`; asking for
//! the wrong kind yields `MetricsError::UnexpectedKind` instead of a panic.

mod counter;
mod event;
mod gauge;
mod timer;

use std::sync::Arc;

pub use counter::Counter;
pub use event::{Event, EVENT_PREFIX};
pub use gauge::Gauge;
pub use timer::Timer;

use crate::error::{MetricsError, Result};
use crate::kind::MetricKind;
use crate::snapshot::{InstrumentSnapshot, SnapshotValue};
use crate::tag::{Tag, Tagged, Tags};

/// Shared handle to one instrument of any kind.
///
/// Cloning is cheap and yields a handle to the same instrument.
#[derive(Debug, Clone)]
pub enum Instrument {
    Counter(Arc<Counter>),
    Gauge(Arc<Gauge>),
    Timer(Arc<Timer>),
    Event(Arc<Event>),
}

impl Instrument {
    /// Fresh instrument of `kind`, zero-valued, carrying `tags` in order.
    pub fn new(kind: MetricKind, tags: &[Tag]) -> Self {
        match kind {
            MetricKind::Counter => Instrument::Counter(Arc::new(Counter::new(tags))),
            MetricKind::Gauge => Instrument::Gauge(Arc::new(Gauge::new(tags))),
            MetricKind::Timer => Instrument::Timer(Arc::new(Timer::new(tags))),
            MetricKind::Event => Instrument::Event(Arc::new(Event::new(tags))),
        }
    }

    pub fn kind(&self) -> MetricKind {
        match self {
            Instrument::Counter(_) => MetricKind::Counter,
            Instrument::Gauge(_) => MetricKind::Gauge,
            Instrument::Timer(_) => MetricKind::Timer,
            Instrument::Event(_) => MetricKind::Event,
        }
    }

    pub fn tags(&self) -> Tags {
        match self {
            Instrument::Counter(c) => c.tags(),
            Instrument::Gauge(g) => g.tags(),
            Instrument::Timer(t) => t.tags(),
            Instrument::Event(e) => e.tags(),
        }
    }

    pub fn with_tags(&self, tags: &[Tag]) -> &Self {
        match self {
            Instrument::Counter(c) => {
                c.with_tags(tags);
            }
            Instrument::Gauge(g) => {
                g.with_tags(tags);
            }
            Instrument::Timer(t) => {
                t.with_tags(tags);
            }
            Instrument::Event(e) => {
                e.with_tags(tags);
            }
        }
        self
    }

    pub fn with_tag(&self, key: &str, value: &str) -> &Self {
        self.with_tags(&[Tag::new(key, value)])
    }

    pub fn as_counter(&self) -> Result<Arc<Counter>> {
        match self {
            Instrument::Counter(c) => Ok(Arc::clone(c)),
            other => Err(other.unexpected(MetricKind::Counter)),
        }
    }

    pub fn as_gauge(&self) -> Result<Arc<Gauge>> {
        match self {
            Instrument::Gauge(g) => Ok(Arc::clone(g)),
            other => Err(other.unexpected(MetricKind::Gauge)),
        }
    }

    pub fn as_timer(&self) -> Result<Arc<Timer>> {
        match self {
            Instrument::Timer(t) => Ok(Arc::clone(t)),
            other => Err(other.unexpected(MetricKind::Timer)),
        }
    }

    pub fn as_event(&self) -> Result<Arc<Event>> {
        match self {
            Instrument::Event(e) => Ok(Arc::clone(e)),
            other => Err(other.unexpected(MetricKind::Event)),
        }
    }

    /// True when both handles point at the very same instrument.
    pub fn ptr_eq(&self, other: &Instrument) -> bool {
        match (self, other) {
            (Instrument::Counter(a), Instrument::Counter(b)) => Arc::ptr_eq(a, b),
            (Instrument::Gauge(a), Instrument::Gauge(b)) => Arc::ptr_eq(a, b),
            (Instrument::Timer(a), Instrument::Timer(b)) => Arc::ptr_eq(a, b),
            (Instrument::Event(a), Instrument::Event(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Read-only copy of the current state.
    ///
    /// Tags and value are read under separate locks; a concurrent writer may
    /// land between the two reads.
    pub fn snapshot(&self) -> InstrumentSnapshot {
        let value = match self {
            Instrument::Counter(c) => SnapshotValue::Counter { value: c.value() },
            Instrument::Gauge(g) => SnapshotValue::Gauge { value: g.value() },
            Instrument::Timer(t) => SnapshotValue::timer(t.times()),
            Instrument::Event(e) => SnapshotValue::Event {
                last_sent: e.last_sent(),
            },
        };
        InstrumentSnapshot {
            value,
            tags: self.tags(),
        }
    }

    fn unexpected(&self, expected: MetricKind) -> MetricsError {
        MetricsError::UnexpectedKind {
            expected,
            found: self.kind(),
        }
    }
}

impl From<Arc<Counter>> for Instrument {
    fn from(c: Arc<Counter>) -> Self {
        Instrument::Counter(c)
    }
}

impl From<Arc<Gauge>> for Instrument {
    fn from(g: Arc<Gauge>) -> Self {
        Instrument::Gauge(g)
    }
}

impl From<Arc<Timer>> for Instrument {
    fn from(t: Arc<Timer>) -> Self {
        Instrument::Timer(t)
    }
}

impl From<Arc<Event>> for Instrument {
    fn from(e: Arc<Event>) -> Self {
        Instrument::Event(e)
    }
}
