use ek_core::Swarm;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::clock::FrameClock;
use crate::config::SimConfig;
use crate::context::SimContext;
use crate::error::SimResult;
use crate::event::EventLog;
use crate::spawn::spawn_swarm;
use crate::system::System;

/// The top-level simulation orchestrator.
///
/// Owns the swarm, frame clock, event log, and registered systems, and
/// drives the per-frame update sequence. The swarm is written exclusively
/// through [`Simulation::step`]; the render side reads it through
/// [`Simulation::swarm`].
pub struct Simulation {
    swarm: Swarm,
    clock: FrameClock,
    events: EventLog,
    systems: Vec<Box<dyn System>>,
    initialized: bool,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("frame", &self.clock.frame())
            .field("particles", &self.swarm.len())
            .field("systems", &self.systems.len())
            .field("events", &self.events.len())
            .finish()
    }
}

impl Simulation {
    /// Validate `config`, seed the RNG, and spawn the swarm.
    ///
    /// The RNG is consumed by spawning; the per-frame update is fully
    /// deterministic afterwards.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let viewport = config.viewport()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let swarm = spawn_swarm(config.particles, &viewport, &mut rng)?;
        Ok(Self {
            swarm,
            clock: FrameClock::new(),
            events: EventLog::new(config.max_events),
            systems: Vec::new(),
            initialized: false,
        })
    }

    /// Register a system. Systems are ticked in registration order.
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        self.systems.push(Box::new(system));
    }

    /// Initialize all registered systems.
    pub fn init(&mut self) -> SimResult<()> {
        if self.initialized {
            return Ok(());
        }
        for i in 0..self.systems.len() {
            let mut system = std::mem::replace(&mut self.systems[i], Box::new(NoopSystem));
            let mut ctx = SimContext {
                swarm: &mut self.swarm,
                clock: &self.clock,
                events: &mut self.events,
            };
            system.init(&mut ctx)?;
            self.systems[i] = system;
        }
        self.initialized = true;
        Ok(())
    }

    /// Advance the simulation by one frame.
    ///
    /// Runs every system against the current frame number, then advances
    /// the clock; the first call executes at frame 0.
    pub fn step(&mut self) -> SimResult<()> {
        if !self.initialized {
            self.init()?;
        }

        for i in 0..self.systems.len() {
            let mut system = std::mem::replace(&mut self.systems[i], Box::new(NoopSystem));
            let mut ctx = SimContext {
                swarm: &mut self.swarm,
                clock: &self.clock,
                events: &mut self.events,
            };
            system.tick(&mut ctx)?;
            self.systems[i] = system;
        }

        self.clock.advance();
        Ok(())
    }

    /// Advance the simulation by `n` frames.
    pub fn run(&mut self, n: u64) -> SimResult<()> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }

    /// The particle collection.
    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    /// Mutable access to the particle collection.
    pub fn swarm_mut(&mut self) -> &mut Swarm {
        &mut self.swarm
    }

    /// The frame clock.
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// The number of frames stepped so far.
    pub fn current_frame(&self) -> u64 {
        self.clock.frame()
    }

    /// The in-memory event log.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Access a system by downcasting to a concrete type.
    pub fn get_system<T: System + 'static>(&self) -> Option<&T> {
        self.systems
            .iter()
            .find_map(|s| s.as_any().downcast_ref::<T>())
    }

    /// Access a system mutably by downcasting to a concrete type.
    pub fn get_system_mut<T: System + 'static>(&mut self) -> Option<&mut T> {
        self.systems
            .iter_mut()
            .find_map(|s| s.as_any_mut().downcast_mut::<T>())
    }

    /// Extract the swarm, consuming the simulation.
    pub fn into_swarm(self) -> Swarm {
        self.swarm
    }
}

/// Placeholder system used during the swap-and-tick pattern.
#[derive(Debug)]
struct NoopSystem;

impl System for NoopSystem {
    fn name(&self) -> &str {
        "noop"
    }
    fn tick(&mut self, _ctx: &mut SimContext<'_>) -> SimResult<()> {
        Ok(())
    }
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::SimEventKind;
    use crate::motion::MotionSystem;
    use ek_core::Vec2;

    fn sim_with_motion(config: SimConfig) -> Simulation {
        let viewport = config.viewport().unwrap();
        let mut sim = Simulation::new(config).unwrap();
        sim.add_system(MotionSystem::new(viewport));
        sim
    }

    #[test]
    fn invalid_config_rejected_up_front() {
        assert!(Simulation::new(SimConfig::default().with_particles(0)).is_err());
        assert!(Simulation::new(SimConfig::default().with_bounds(-1.0, 600.0)).is_err());
    }

    #[test]
    fn count_and_labels_stable_over_many_frames() {
        let mut sim = sim_with_motion(SimConfig::default().with_seed(2024));
        let labels_before: Vec<String> =
            sim.swarm().iter().map(|p| p.label.to_string()).collect();

        sim.run(500).unwrap();

        assert_eq!(sim.current_frame(), 500);
        assert_eq!(sim.swarm().len(), 5);
        let labels_after: Vec<String> =
            sim.swarm().iter().map(|p| p.label.to_string()).collect();
        assert_eq!(labels_before, labels_after);
    }

    #[test]
    fn same_seed_same_trajectories() {
        let make = || {
            let mut sim = sim_with_motion(SimConfig::default().with_seed(123));
            sim.run(100).unwrap();
            sim.into_swarm()
        };
        let a = make();
        let b = make();
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn wall_scenario_through_the_full_stack() {
        let config = SimConfig::default().with_particles(1).with_seed(1);
        let mut sim = sim_with_motion(config);
        {
            let p = sim.swarm_mut().get_mut(0).unwrap();
            p.position = Vec2::new(799.5, 300.0);
            p.velocity = Vec2::new(1.0, 0.0);
        }

        sim.step().unwrap();
        let p = *sim.swarm().get(0).unwrap();
        assert_eq!(p.position, Vec2::new(800.5, 300.0));
        assert_eq!(p.velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(sim.events().len(), 1);
        assert!(matches!(
            sim.events().events()[0].kind,
            SimEventKind::WallBounce { .. }
        ));
        assert_eq!(sim.events().events()[0].frame, 0);

        sim.step().unwrap();
        let p = *sim.swarm().get(0).unwrap();
        assert_eq!(p.position, Vec2::new(799.5, 300.0));
        assert_eq!(p.velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(sim.events().len(), 1);
    }

    #[test]
    fn custom_system_registration() {
        #[derive(Debug)]
        struct CustomSystem {
            ticked: bool,
        }
        impl System for CustomSystem {
            fn name(&self) -> &str {
                "custom"
            }
            fn tick(&mut self, _ctx: &mut SimContext<'_>) -> SimResult<()> {
                self.ticked = true;
                Ok(())
            }
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
                self
            }
        }

        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        sim.add_system(CustomSystem { ticked: false });

        sim.step().unwrap();

        let custom = sim.get_system::<CustomSystem>().unwrap();
        assert!(custom.ticked);
    }

    #[test]
    fn no_systems_still_advances_the_clock() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        sim.run(10).unwrap();
        assert_eq!(sim.current_frame(), 10);
        assert!(sim.events().is_empty());
    }

    #[test]
    fn get_system_finds_registered_motion() {
        let sim = sim_with_motion(SimConfig::default());
        let motion = sim.get_system::<MotionSystem>().unwrap();
        assert_eq!(motion.name(), "motion");
        assert_eq!(motion.viewport().width(), 800.0);
    }
}
