use serde::{Deserialize, Serialize};

use crate::particle::Particle;

/// The ordered, fixed-length particle collection.
///
/// Insertion order is also drawing and trace order. The collection exposes
/// no insertion or removal after construction: its length is constant for
/// the process lifetime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Swarm {
    particles: Vec<Particle>,
}

impl Swarm {
    /// Build a swarm from an already-initialized set of particles.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns `true` if the swarm holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Shared view of the particles in index order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Iterate over the particles in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Iterate mutably over the particles in index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    /// The particle at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    /// Mutable access to the particle at `index`, if in range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }
}
