use ek_core::Viewport;

use crate::context::SimContext;
use crate::error::SimResult;
use crate::event::{Axis, SimEventKind};
use crate::system::System;

/// Advances every particle by one Euler step and reflects velocities at
/// the viewport walls.
///
/// Integration uses a unit time step (one frame) with no delta-time
/// scaling, so motion is frame-rate dependent. Reflection flips the
/// velocity sign only; the position is not clamped back inside the bound,
/// so a particle may sit outside the viewport for one frame before
/// drifting back in.
#[derive(Debug)]
pub struct MotionSystem {
    viewport: Viewport,
}

impl MotionSystem {
    /// Create a motion system for the given bounds.
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    /// The bounds particles reflect off.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

impl System for MotionSystem {
    fn name(&self) -> &str {
        "motion"
    }

    fn tick(&mut self, ctx: &mut SimContext<'_>) -> SimResult<()> {
        let width = self.viewport.width();
        let height = self.viewport.height();

        // The two axis checks are independent; both can flip in one frame.
        let mut bounces = Vec::new();
        for p in ctx.swarm.iter_mut() {
            p.position += p.velocity;

            let hit_x = p.position.x < 0.0 || p.position.x >= width;
            let hit_y = p.position.y < 0.0 || p.position.y >= height;
            if hit_x {
                p.velocity.x = -p.velocity.x;
            }
            if hit_y {
                p.velocity.y = -p.velocity.y;
            }
            match (hit_x, hit_y) {
                (true, true) => bounces.push((p.label, None)),
                (true, false) => bounces.push((p.label, Some(Axis::X))),
                (false, true) => bounces.push((p.label, Some(Axis::Y))),
                (false, false) => {}
            }
        }

        for (label, axis) in bounces {
            match axis {
                Some(axis) => ctx.emit(
                    SimEventKind::WallBounce { label, axis },
                    format!("{label} bounced off the {axis} wall"),
                ),
                None => ctx.emit(
                    SimEventKind::CornerBounce { label },
                    format!("{label} bounced in a corner"),
                ),
            }
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
