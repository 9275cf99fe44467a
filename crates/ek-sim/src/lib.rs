//! Tick-based bouncing-particle simulation for Elektron.
//!
//! Provides a system-based simulation framework operating on an
//! [`ek_core::Swarm`]. An external render/event loop calls
//! [`Simulation::step`] once per frame; registered systems integrate
//! motion, reflect velocities at the viewport walls, and append kinematic
//! trace records on a fixed frame cadence.

/// Offline statistics over recorded traces.
pub mod analysis;
/// Monotonic frame counter driving the tick loop and trace cadence.
pub mod clock;
/// Configuration for simulation runs.
pub mod config;
/// Mutable context passed to systems each frame.
pub mod context;
/// Error types for the simulation crate.
pub mod error;
/// Simulation event types and the event log.
pub mod event;
/// Motion system: Euler integration and wall reflection.
pub mod motion;
/// Trace system: cadence-gated kinematics recording.
pub mod recorder;
/// The top-level simulation orchestrator.
pub mod simulation;
/// Randomized initial placement of a fresh swarm.
pub mod spawn;
/// The trait all simulation systems implement.
pub mod system;
/// Trace records and the plain-text trace sink.
pub mod trace;

/// Re-export of [`analysis::TraceSummary`].
pub use analysis::TraceSummary;
/// Re-export of [`clock::FrameClock`].
pub use clock::FrameClock;
/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-export of [`context::SimContext`].
pub use context::SimContext;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of [`event::EventLog`], [`event::SimEvent`], and [`event::SimEventKind`].
pub use event::{EventLog, SimEvent, SimEventKind};
/// Re-export of [`motion::MotionSystem`].
pub use motion::MotionSystem;
/// Re-export of [`recorder::TraceSystem`].
pub use recorder::TraceSystem;
/// Re-export of [`simulation::Simulation`].
pub use simulation::Simulation;
/// Re-export of [`system::System`].
pub use system::System;
/// Re-exports of [`trace::TraceRecord`] and [`trace::TraceWriter`].
pub use trace::{TraceRecord, TraceWriter};
