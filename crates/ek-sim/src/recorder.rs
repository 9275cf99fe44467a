use std::path::Path;

use crate::context::SimContext;
use crate::error::{SimError, SimResult};
use crate::system::System;
use crate::trace::{TraceRecord, TraceWriter};

/// Samples every particle's kinematic state on a fixed frame cadence.
///
/// One record per particle, in swarm order, is appended whenever
/// `frame % every == 0`, frame 0 included. The cadence is applied to the
/// simulation's own frame counter, never to wall-clock ticks.
#[derive(Debug)]
pub struct TraceSystem {
    writer: TraceWriter,
    every: u64,
}

impl TraceSystem {
    /// Record to an already-open sink every `every` frames.
    ///
    /// Errors with [`SimError::InvalidConfig`] if `every` is zero.
    pub fn new(writer: TraceWriter, every: u64) -> SimResult<Self> {
        if every == 0 {
            return Err(SimError::InvalidConfig("trace cadence must be > 0".into()));
        }
        Ok(Self { writer, every })
    }

    /// Create the sink at `path` and record every `every` frames.
    pub fn create(path: impl AsRef<Path>, every: u64) -> SimResult<Self> {
        Self::new(TraceWriter::create(path)?, every)
    }

    /// Number of records written so far.
    pub fn records_written(&self) -> u64 {
        self.writer.lines_written()
    }

    /// Flush buffered records to disk.
    pub fn flush(&mut self) -> SimResult<()> {
        self.writer.flush()
    }
}

impl System for TraceSystem {
    fn name(&self) -> &str {
        "trace"
    }

    fn tick(&mut self, ctx: &mut SimContext<'_>) -> SimResult<()> {
        if ctx.frame() % self.every != 0 {
            return Ok(());
        }
        for p in ctx.swarm.iter() {
            self.writer.append(&TraceRecord::from(p))?;
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
