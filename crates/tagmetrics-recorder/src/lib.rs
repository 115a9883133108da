//! tagmetrics recorder: the concurrent metric registry and its config loader.
//!
//! Build one `Recorder` per process (or per test) and pass it around
//! explicitly; there is no global instance.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod recorder;

pub use recorder::Recorder;
