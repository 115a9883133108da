//! Helpers shared by recorder integration tests.

#![allow(dead_code)]

use tagmetrics_core::Tag;
use tracing_subscriber::{fmt, EnvFilter};

/// Route `tracing` output to the test harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn tags(pairs: &[(&str, &str)]) -> Vec<Tag> {
    pairs.iter().map(|(k, v)| Tag::new(*k, *v)).collect()
}
