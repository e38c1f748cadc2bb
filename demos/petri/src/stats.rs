//! Per-step statistics written through [`SimObserver::on_step_end`].

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Result, anyhow};
use csv::Writer;

use slime_agent::AgentStore;
use slime_core::Tick;
use slime_grid::TrailMaps;
use slime_sim::SimObserver;

/// Appends one `step,tick,agents,total_intensity,max_intensity` row per
/// host step that ran ticks.
///
/// The host announces each step with [`begin_step`](Self::begin_step), so
/// the `step` column matches the run loop even when a step with no agents
/// produces no row.
///
/// Observer hooks cannot fail, so the first write error is held and
/// reported by [`finish`](Self::finish).
pub struct StatsObserver<W: Write> {
    writer:    Option<Writer<W>>,
    host_step: u64,
    rows:      usize,
    error:     Option<csv::Error>,
}

impl StatsObserver<File> {
    pub fn to_path(path: &Path) -> Result<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> StatsObserver<W> {
    pub fn from_writer(inner: W) -> Result<Self> {
        let mut writer = Writer::from_writer(inner);
        writer.write_record(["step", "tick", "agents", "total_intensity", "max_intensity"])?;
        Ok(Self { writer: Some(writer), host_step: 0, rows: 0, error: None })
    }

    pub fn disabled() -> Self {
        Self { writer: None, host_step: 0, rows: 0, error: None }
    }

    /// Label rows written until the next call with `step`.
    pub fn begin_step(&mut self, step: u64) {
        self.host_step = step;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying writer, if enabled.
    pub fn finish(mut self) -> Result<Option<W>> {
        if let Some(e) = self.error.take() {
            return Err(e.into());
        }
        let Some(mut writer) = self.writer.take() else {
            return Ok(None);
        };
        writer.flush()?;
        let inner = writer
            .into_inner()
            .map_err(|e| anyhow!("flushing stats: {}", e.error()))?;
        Ok(Some(inner))
    }
}

impl<W: Write> SimObserver for StatsObserver<W> {
    fn on_step_end(&mut self, tick: Tick, maps: &TrailMaps, agents: &AgentStore) {
        let (Some(writer), None) = (self.writer.as_mut(), self.error.as_ref()) else {
            return;
        };
        let result = writer.write_record(&[
            self.host_step.to_string(),
            tick.0.to_string(),
            agents.count().to_string(),
            format!("{:.4}", maps.total_intensity()),
            format!("{:.4}", maps.max_intensity()),
        ]);
        match result {
            Ok(()) => self.rows += 1,
            Err(e) => self.error = Some(e),
        }
    }
}
