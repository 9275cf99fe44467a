use ek_core::Swarm;

use crate::clock::FrameClock;
use crate::event::{EventLog, SimEvent, SimEventKind};

/// Mutable context passed to each system during a frame.
pub struct SimContext<'a> {
    /// The particle collection, mutated in place.
    pub swarm: &'a mut Swarm,
    /// The simulation's frame clock (read-only for systems).
    pub clock: &'a FrameClock,
    /// The in-memory event log.
    pub events: &'a mut EventLog,
}

impl SimContext<'_> {
    /// Emit a simulation event at the current frame.
    pub fn emit(&mut self, kind: SimEventKind, description: impl Into<String>) {
        self.events
            .push(SimEvent::new(self.clock.frame(), kind, description));
    }

    /// The current frame number.
    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }
}
