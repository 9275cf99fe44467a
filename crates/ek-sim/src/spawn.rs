use ek_core::{Label, Particle, Swarm, Vec2, Viewport};
use rand::Rng;
use rand::rngs::StdRng;

use crate::error::SimResult;

/// Spawn `count` particles with uniform random positions inside the
/// viewport and velocity components uniform in [-1, 1].
///
/// Labels are assigned sequentially ('A', 'B', …, wrapping past 'Z').
/// Particles are not forced distinct in position or velocity; collisions
/// between particles are not modeled.
pub fn spawn_swarm(count: usize, viewport: &Viewport, rng: &mut StdRng) -> SimResult<Swarm> {
    let mut particles = Vec::with_capacity(count);
    for i in 0..count {
        let position = Vec2::new(
            rng.random_range(0.0..viewport.width()),
            rng.random_range(0.0..viewport.height()),
        );
        let velocity = Vec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0));
        particles.push(Particle::new(Label::sequence(i), position, velocity)?);
    }
    Ok(Swarm::from_particles(particles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn spawns_requested_count_with_sequential_labels() {
        let mut rng = StdRng::seed_from_u64(7);
        let swarm = spawn_swarm(5, &viewport(), &mut rng).unwrap();
        assert_eq!(swarm.len(), 5);
        let labels: String = swarm.iter().map(|p| p.label.0).collect();
        assert_eq!(labels, "ABCDE");
    }

    #[test]
    fn positions_inside_viewport_velocities_unit_bounded() {
        let vp = viewport();
        let mut rng = StdRng::seed_from_u64(99);
        let swarm = spawn_swarm(100, &vp, &mut rng).unwrap();
        for p in swarm.iter() {
            assert!(vp.contains(p.position), "spawned outside: {:?}", p.position);
            assert!((-1.0..=1.0).contains(&p.velocity.x));
            assert!((-1.0..=1.0).contains(&p.velocity.y));
        }
    }

    #[test]
    fn same_seed_spawns_identically() {
        let vp = viewport();
        let mut a = StdRng::seed_from_u64(1234);
        let mut b = StdRng::seed_from_u64(1234);
        let sa = spawn_swarm(8, &vp, &mut a).unwrap();
        let sb = spawn_swarm(8, &vp, &mut b).unwrap();
        for (pa, pb) in sa.iter().zip(sb.iter()) {
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn labels_wrap_past_twenty_six() {
        let mut rng = StdRng::seed_from_u64(0);
        let swarm = spawn_swarm(28, &viewport(), &mut rng).unwrap();
        assert_eq!(swarm.get(26).unwrap().label.to_string(), "A");
        assert_eq!(swarm.get(27).unwrap().label.to_string(), "B");
    }
}
