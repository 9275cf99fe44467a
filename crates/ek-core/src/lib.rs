//! Core types for Elektron: particles, labels, the viewport, and the swarm.
//!
//! This crate defines the data model the simulation operates on. It is
//! independent of the tick loop — you can construct a [`Swarm`]
//! programmatically or deserialize one from JSON.

/// Error types used throughout the crate.
pub mod error;
/// Particle state and display labels.
pub mod particle;
/// The ordered, fixed-length particle collection.
pub mod swarm;
/// 2D vector type for positions and velocities.
pub mod vec2;
/// Rectangular simulation bounds.
pub mod viewport;

/// Re-export error types.
pub use error::{EkError, EkResult};
/// Re-export particle types.
pub use particle::{Label, Particle};
/// Re-export the particle collection.
pub use swarm::Swarm;
/// Re-export the vector type.
pub use vec2::Vec2;
/// Re-export the viewport bounds.
pub use viewport::Viewport;
