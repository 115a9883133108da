use std::collections::HashSet;

use serde::Deserialize;
use tagmetrics_core::error::{MetricsError, Result};
use tagmetrics_core::{MetricKind, Tag};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecorderConfig {
    pub version: u32,

    /// Instruments created up front, in listed order.
    #[serde(default)]
    pub metrics: Vec<MetricConfig>,
}

impl RecorderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsError::UnsupportedVersion);
        }

        let mut seen = HashSet::new();
        for m in &self.metrics {
            m.validate()?;
            if !seen.insert(m.name.as_str()) {
                return Err(MetricsError::BadConfig(format!(
                    "metrics: duplicate name {:?}",
                    m.name
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricConfig {
    pub name: String,
    pub kind: MetricKind,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl MetricConfig {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(MetricsError::BadConfig("metrics[].name must not be empty".into()));
        }
        Ok(())
    }
}
