//! Recorder config: strict YAML parsing, then validation.
//!
//! Every failure maps onto `MetricsError`: unreadable files are `Internal`
//! (with the path), malformed or unknown fields are `BadConfig`, and a wrong
//! `version` is `UnsupportedVersion`.

pub mod schema;

use std::fs;
use std::path::Path;

use tagmetrics_core::error::{MetricsError, Result};

pub use schema::{MetricConfig, RecorderConfig};

/// Read and validate a config file.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<RecorderConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        MetricsError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    let cfg = load_from_str(&s)?;
    tracing::debug!(path = %path.display(), metrics = cfg.metrics.len(), "recorder config loaded");
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<RecorderConfig> {
    let cfg: RecorderConfig = serde_yaml::from_str(s)
        .map_err(|e| MetricsError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
