use ek_core::Viewport;

use crate::error::{SimError, SimResult};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Viewport width in position units.
    pub width: f64,
    /// Viewport height in position units.
    pub height: f64,
    /// Number of particles to spawn.
    pub particles: usize,
    /// RNG seed for deterministic spawning.
    pub seed: u64,
    /// Trace cadence: a record per particle every `trace_every` frames.
    pub trace_every: u64,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            particles: 5,
            seed: 42,
            trace_every: 10,
            max_events: 0,
        }
    }
}

impl SimConfig {
    /// Set the viewport bounds.
    pub fn with_bounds(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the number of particles to spawn.
    pub fn with_particles(mut self, particles: usize) -> Self {
        self.particles = particles;
        self
    }

    /// Set the RNG seed for deterministic spawning.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the trace cadence in frames.
    pub fn with_trace_every(mut self, every: u64) -> Self {
        self.trace_every = every;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Check every field against its domain.
    ///
    /// The viewport bounds must be finite and positive, at least one
    /// particle must be requested, and the trace cadence must be nonzero.
    pub fn validate(&self) -> SimResult<()> {
        self.viewport()?;
        if self.particles == 0 {
            return Err(SimError::InvalidConfig("particles must be > 0".into()));
        }
        if self.trace_every == 0 {
            return Err(SimError::InvalidConfig("trace_every must be > 0".into()));
        }
        Ok(())
    }

    /// The viewport described by `width` x `height`.
    pub fn viewport(&self) -> SimResult<Viewport> {
        Ok(Viewport::new(self.width, self.height)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = SimConfig::default();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.height, 600.0);
        assert_eq!(config.particles, 5);
        assert_eq!(config.seed, 42);
        assert_eq!(config.trace_every, 10);
        assert_eq!(config.max_events, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder_chain() {
        let config = SimConfig::default()
            .with_bounds(1024.0, 768.0)
            .with_particles(12)
            .with_seed(123)
            .with_trace_every(3)
            .with_max_events(500);
        assert_eq!(config.width, 1024.0);
        assert_eq!(config.height, 768.0);
        assert_eq!(config.particles, 12);
        assert_eq!(config.seed, 123);
        assert_eq!(config.trace_every, 3);
        assert_eq!(config.max_events, 500);
    }

    #[test]
    fn zero_particles_rejected() {
        let err = SimConfig::default().with_particles(0).validate().unwrap_err();
        assert!(err.to_string().contains("particles"));
    }

    #[test]
    fn zero_cadence_rejected() {
        let err = SimConfig::default()
            .with_trace_every(0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("trace_every"));
    }

    #[test]
    fn bad_bounds_rejected() {
        assert!(SimConfig::default().with_bounds(0.0, 600.0).validate().is_err());
        assert!(
            SimConfig::default()
                .with_bounds(800.0, f64::NAN)
                .validate()
                .is_err()
        );
    }
}
