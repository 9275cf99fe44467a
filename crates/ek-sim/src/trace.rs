use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use ek_core::Particle;

use crate::error::{SimError, SimResult};

/// One kinematic sample: a particle's position and velocity at the moment
/// of capture.
///
/// The text form is one line of four whitespace-separated reals with
/// default float formatting: `"<x> <y> <vx> <vy>"`. Records carry no
/// label or frame number; readers separate particles by stride.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRecord {
    /// Sampled x position.
    pub x: f64,
    /// Sampled y position.
    pub y: f64,
    /// Sampled horizontal velocity.
    pub vx: f64,
    /// Sampled vertical velocity.
    pub vy: f64,
}

impl TraceRecord {
    /// Parse one trace line. Returns a human-readable reason on failure.
    pub fn from_line(line: &str) -> Result<Self, String> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(format!("expected 4 fields, found {}", fields.len()));
        }
        let parse = |tok: &str, name: &str| {
            tok.parse::<f64>()
                .map_err(|_| format!("{name} is not a number: {tok:?}"))
        };
        Ok(Self {
            x: parse(fields[0], "x")?,
            y: parse(fields[1], "y")?,
            vx: parse(fields[2], "vx")?,
            vy: parse(fields[3], "vy")?,
        })
    }
}

impl From<&Particle> for TraceRecord {
    fn from(p: &Particle) -> Self {
        Self {
            x: p.position.x,
            y: p.position.y,
            vx: p.velocity.x,
            vy: p.velocity.y,
        }
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.vx, self.vy)
    }
}

/// Append-only plain-text sink for kinematic records.
///
/// The destination is created (truncating any previous run's contents)
/// once at startup; buffered output is flushed when the writer is
/// dropped, on every exit path. Creation failure is surfaced immediately
/// rather than discovered mid-run.
#[derive(Debug)]
pub struct TraceWriter {
    out: BufWriter<File>,
    path: PathBuf,
    lines: u64,
}

impl TraceWriter {
    /// Create the trace file at `path`.
    ///
    /// Errors with [`SimError::Trace`] if the destination cannot be
    /// opened.
    pub fn create(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        Ok(Self {
            out: BufWriter::new(file),
            path,
            lines: 0,
        })
    }

    /// Append one record as a single line.
    pub fn append(&mut self, record: &TraceRecord) -> SimResult<()> {
        writeln!(self.out, "{record}")?;
        self.lines += 1;
        Ok(())
    }

    /// Number of lines written so far.
    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush buffered records to disk.
    pub fn flush(&mut self) -> SimResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Read an entire trace file back into records.
///
/// Blank lines are skipped; any other unparseable line errors with its
/// 1-based line number.
pub fn read_records(path: impl AsRef<Path>) -> SimResult<Vec<TraceRecord>> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = TraceRecord::from_line(&line).map_err(|reason| SimError::MalformedRecord {
            line: idx + 1,
            reason,
        })?;
        records.push(record);
    }
    Ok(records)
}
