use serde::Serialize;

use crate::error::{SimError, SimResult};
use crate::trace::TraceRecord;

/// Aggregate statistics computed from a recorded trace.
#[derive(Debug, Clone, Serialize)]
pub struct TraceSummary {
    /// Total records in the trace.
    pub records: usize,
    /// Logged frames (records divided by the particle stride).
    pub frames: usize,
    /// Particle stride used to separate lanes.
    pub particles: usize,
    /// Mean horizontal velocity across all records.
    pub mean_vx: f64,
    /// Mean vertical velocity across all records.
    pub mean_vy: f64,
    /// Mean speed across all records.
    pub mean_speed: f64,
    /// Total path length summed over all lanes.
    pub total_distance: f64,
}

/// Summarize `records`, de-interleaving per-particle lanes by stride.
///
/// Trace lines carry no label: with N particles logged per frame, lane k
/// is records k, k+N, k+2N, … The path length is accumulated within each
/// lane; diffing consecutive rows across lanes would count the jump from
/// one particle to the next as travel.
///
/// Errors with [`SimError::InvalidConfig`] if `particles` is zero.
pub fn summarize(records: &[TraceRecord], particles: usize) -> SimResult<TraceSummary> {
    if particles == 0 {
        return Err(SimError::InvalidConfig("particle stride must be > 0".into()));
    }

    let n = records.len();
    let (mut sum_vx, mut sum_vy, mut sum_speed) = (0.0, 0.0, 0.0);
    for r in records {
        sum_vx += r.vx;
        sum_vy += r.vy;
        sum_speed += r.vx.hypot(r.vy);
    }
    let denom = n.max(1) as f64;

    let mut total_distance = 0.0;
    for lane in 0..particles.min(n) {
        let mut prev: Option<&TraceRecord> = None;
        let mut idx = lane;
        while idx < n {
            let rec = &records[idx];
            if let Some(p) = prev {
                total_distance += (rec.x - p.x).hypot(rec.y - p.y);
            }
            prev = Some(rec);
            idx += particles;
        }
    }

    Ok(TraceSummary {
        records: n,
        frames: n / particles,
        particles,
        mean_vx: sum_vx / denom,
        mean_vy: sum_vy / denom,
        mean_speed: sum_speed / denom,
        total_distance,
    })
}
