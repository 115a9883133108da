//! tagmetrics core: tags, metric instruments, snapshots, and the error surface.
//!
//! This crate defines the instrument types a registry hands out and the
//! tag-composition rules they share. It carries no map or runtime
//! dependencies so instruments can be used standalone or behind any registry.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every instrument operation is total; the only fallible paths are typed
//! downcasts and config handling, surfaced as `MetricsError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod instrument;
pub mod kind;
pub mod snapshot;
pub mod tag;

/// Shared result type.
pub use error::{MetricsError, Result};
pub use instrument::{Counter, Event, Gauge, Instrument, Timer};
pub use kind::MetricKind;
pub use snapshot::{InstrumentSnapshot, MetricSnapshot, SnapshotValue};
pub use tag::{Tag, Tagged, Tags};
