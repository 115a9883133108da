//! The metric registry: name -> instrument, get-or-create per kind.

use std::sync::Arc;

use dashmap::DashMap;

use tagmetrics_core::error::Result;
use tagmetrics_core::{Counter, Event, Gauge, Instrument, MetricKind, MetricSnapshot, Tag, Timer};

use crate::config::RecorderConfig;

/// In-memory registry of named instruments.
///
/// - `name -> Instrument`, one binding per name for the recorder's lifetime
/// - creation runs inside the map's entry lock, so concurrent first requests
///   for a name agree on a single instance
/// - each instrument carries its own locks; no lock spans instruments
#[derive(Debug, Default)]
pub struct Recorder {
    instruments: DashMap<String, Instrument>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            instruments: DashMap::new(),
        }
    }

    /// Build a recorder with every metric listed in `cfg` preregistered.
    pub fn from_config(cfg: &RecorderConfig) -> Result<Self> {
        cfg.validate()?;

        let recorder = Self::new();
        for m in &cfg.metrics {
            recorder.get_or_create(&m.name, m.kind, &m.tags);
        }
        tracing::info!(metrics = cfg.metrics.len(), "recorder preregistered from config");
        Ok(recorder)
    }

    /// Return the instrument bound to `name`, creating one of `kind` with
    /// `tags` if the name is free.
    ///
    /// Never fails. An existing binding is returned as-is whatever its kind,
    /// and `tags` are ignored for it.
    pub fn get_or_create(&self, name: &str, kind: MetricKind, tags: &[Tag]) -> Instrument {
        if let Some(existing) = self.instruments.get(name) {
            return existing.value().clone();
        }

        self.instruments
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::debug!(metric = %name, kind = %kind, tags = tags.len(), "instrument created");
                Instrument::new(kind, tags)
            })
            .value()
            .clone()
    }

    pub fn counter(&self, name: &str, tags: &[Tag]) -> Result<Arc<Counter>> {
        self.typed(name, MetricKind::Counter, tags, Instrument::as_counter)
    }

    pub fn gauge(&self, name: &str, tags: &[Tag]) -> Result<Arc<Gauge>> {
        self.typed(name, MetricKind::Gauge, tags, Instrument::as_gauge)
    }

    pub fn timer(&self, name: &str, tags: &[Tag]) -> Result<Arc<Timer>> {
        self.typed(name, MetricKind::Timer, tags, Instrument::as_timer)
    }

    pub fn event(&self, name: &str, tags: &[Tag]) -> Result<Arc<Event>> {
        self.typed(name, MetricKind::Event, tags, Instrument::as_event)
    }

    /// Lookup only; never creates.
    pub fn get(&self, name: &str) -> Option<Instrument> {
        self.instruments.get(name).map(|r| r.value().clone())
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.instruments.iter().map(|r| r.key().clone()).collect();
        names.sort();
        names
    }

    /// Read-only copy of every instrument, sorted by name.
    ///
    /// Handles are collected first so no map shard stays locked while
    /// instrument locks are taken.
    pub fn snapshot(&self) -> Vec<MetricSnapshot> {
        let entries: Vec<(String, Instrument)> = self
            .instruments
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect();

        let mut out: Vec<MetricSnapshot> = entries
            .into_iter()
            .map(|(name, inst)| MetricSnapshot {
                name,
                instrument: inst.snapshot(),
            })
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    fn typed<T>(
        &self,
        name: &str,
        kind: MetricKind,
        tags: &[Tag],
        cast: fn(&Instrument) -> Result<T>,
    ) -> Result<T> {
        let inst = self.get_or_create(name, kind, tags);
        cast(&inst).inspect_err(|_| {
            tracing::warn!(metric = %name, requested = %kind, found = %inst.kind(), "instrument kind mismatch");
        })
    }
}
