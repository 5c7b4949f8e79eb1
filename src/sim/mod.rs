//! Simulation module
//!
//! All physics lives here. This module must stay pure:
//! - One fixed step per frame, no wall-clock time
//! - Stable edge iteration order
//! - No windowing or GPU dependencies

pub mod collision;
pub mod hexagon;
pub mod state;
pub mod tick;

pub use collision::{
    CollisionResult, ball_segment_collision, closest_point_on_segment, reflect_velocity_damped,
    resolve,
};
pub use hexagon::{Hexagon, Segment, hexagon_vertices};
pub use state::{Ball, SimState, apply_friction};
pub use tick::{TickOutcome, tick};
