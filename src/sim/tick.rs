//! Per-frame simulation step
//!
//! Rotates the container, integrates the ball, then resolves the ball against
//! every edge in vertex order.

use super::collision::resolve;
use super::state::SimState;
use crate::consts::HEX_SIDES;

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// `bounced[i]` is set when edge `i` reflected the ball this frame
    pub bounced: [bool; HEX_SIDES],
}

impl TickOutcome {
    pub fn bounce_count(&self) -> usize {
        self.bounced.iter().filter(|&&b| b).count()
    }

    pub fn any_bounce(&self) -> bool {
        self.bounced.iter().any(|&b| b)
    }
}

/// Advance the simulation by exactly one frame
pub fn tick(state: &mut SimState) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    state.hexagon.advance();
    state.ball.integrate();

    // Every edge is tested, even after a bounce: near a vertex two edges can
    // both be within reach of the ball.
    for (i, edge) in state.hexagon.edges().enumerate() {
        if resolve(&mut state.ball, &edge) {
            outcome.bounced[i] = true;
            log::trace!(
                "frame {}: bounce off edge {} -> vel ({:.2}, {:.2})",
                state.frame,
                i,
                state.ball.vel.x,
                state.ball.vel.y
            );
        }
    }

    state.frame += 1;
    state.bounces += outcome.bounce_count() as u64;

    outcome
}
