use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EkError, EkResult};
use crate::vec2::Vec2;

/// Number of distinct labels before the sequence wraps back to 'A'.
const LABEL_ALPHABET: usize = 26;

/// Single-character display label assigned to a particle at spawn time.
///
/// Labels are cosmetic: they identify particles in the rendered window and
/// in event descriptions. They are stable for the particle's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label(pub char);

impl Label {
    /// The label for the i-th spawned particle: 'A', 'B', 'C', …
    ///
    /// Past 26 particles the sequence wraps back to 'A'; duplicate labels
    /// are allowed since the swarm is index-ordered.
    pub fn sequence(index: usize) -> Self {
        let offset = (index % LABEL_ALPHABET) as u8;
        Self((b'A' + offset) as char)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A simulated point entity with position, velocity, and a display label.
///
/// No physical charge or field interaction is modeled; "electron" is a
/// label only, and motion is linear kinematics with elastic wall bounces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Stable display label.
    pub label: Label,
    /// Current position in viewport coordinates.
    pub position: Vec2,
    /// Current velocity in units per frame.
    pub velocity: Vec2,
}

impl Particle {
    /// Create a new particle after validating that all components are
    /// finite.
    ///
    /// Errors with [`EkError::InvalidParam`] on NaN or infinite
    /// coordinates.
    pub fn new(label: Label, position: Vec2, velocity: Vec2) -> EkResult<Self> {
        if !position.is_finite() {
            return Err(EkError::InvalidParam("position must be finite".into()));
        }
        if !velocity.is_finite() {
            return Err(EkError::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self {
            label,
            position,
            velocity,
        })
    }

    /// Current speed (velocity magnitude) in units per frame.
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_sequence_starts_at_a() {
        assert_eq!(Label::sequence(0).to_string(), "A");
        assert_eq!(Label::sequence(1).to_string(), "B");
        assert_eq!(Label::sequence(25).to_string(), "Z");
    }

    #[test]
    fn label_sequence_wraps_past_z() {
        assert_eq!(Label::sequence(26), Label::sequence(0));
        assert_eq!(Label::sequence(27).to_string(), "B");
    }

    #[test]
    fn new_particle_ok() -> EkResult<()> {
        let p = Particle::new(
            Label::sequence(0),
            Vec2::new(10.0, 20.0),
            Vec2::new(-0.5, 0.75),
        )?;
        assert_eq!(p.label.to_string(), "A");
        assert_eq!(p.position, Vec2::new(10.0, 20.0));
        assert_eq!(p.velocity, Vec2::new(-0.5, 0.75));
        Ok(())
    }

    #[test]
    fn non_finite_position_rejected() {
        let err = Particle::new(Label::sequence(0), Vec2::new(f64::NAN, 0.0), Vec2::ZERO)
            .unwrap_err();
        assert!(err.to_string().contains("position"));
    }

    #[test]
    fn non_finite_velocity_rejected() {
        let err = Particle::new(
            Label::sequence(0),
            Vec2::ZERO,
            Vec2::new(0.0, f64::INFINITY),
        )
        .unwrap_err();
        assert!(err.to_string().contains("velocity"));
    }

    #[test]
    fn speed_is_velocity_magnitude() -> EkResult<()> {
        let p = Particle::new(Label::sequence(0), Vec2::ZERO, Vec2::new(3.0, 4.0))?;
        assert!((p.speed() - 5.0).abs() < f64::EPSILON);
        Ok(())
    }
}
