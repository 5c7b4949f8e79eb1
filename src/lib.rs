//! Hex Bounce - a ball bouncing inside a slowly rotating hexagon
//!
//! Core modules:
//! - `sim`: Per-frame physics (ball integration, hexagon rotation, collisions)
//! - `draw`: Backend-agnostic draw list the simulation renders into
//! - `scene`: Composes a frame (container, ball, overlay) from simulation state
//! - `renderer`: wgpu pipeline that tessellates and presents a frame
//! - `platform`: Window/event pump and frame pacing
//! - `app`: The frame loop tying everything together

pub mod app;
pub mod draw;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::AppError;
pub use settings::Settings;

use glam::Vec2;

/// Simulation and scene constants
///
/// Physics values are per frame, not per second: the simulation advances
/// exactly one step per rendered frame.
pub mod consts {
    use glam::Vec2;

    /// Logical window size
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;
    pub const WINDOW_TITLE: &str = "Bouncing ball in a rotating hexagon";
    /// Frame pacing target
    pub const TARGET_FPS: u32 = 60;

    /// Added to vertical velocity every frame (pixels/frame²)
    pub const GRAVITY: f32 = 0.5;
    /// Per-frame velocity retention, applied to both axes
    pub const FRICTION: f32 = 0.99;
    /// Fraction of the reflected normal impulse kept on a bounce
    pub const BOUNCE_DAMPING: f32 = 0.8;
    /// Hexagon angular velocity (radians/frame)
    pub const ROTATION_SPEED: f32 = 0.01;

    pub const BALL_RADIUS: f32 = 15.0;
    /// Launch impulse given to the ball at startup (pixels/frame)
    pub const INITIAL_VELOCITY: Vec2 = Vec2::new(5.0, -8.0);

    /// Center-to-vertex distance
    pub const HEXAGON_RADIUS: f32 = 200.0;
    pub const HEX_SIDES: usize = 6;

    /// Hexagon outline thickness in pixels
    pub const OUTLINE_WIDTH: f32 = 3.0;
    /// Top-left corner of the velocity overlay
    pub const OVERLAY_POS: Vec2 = Vec2::new(10.0, 10.0);
    /// Overlay text height in logical pixels
    pub const OVERLAY_FONT_SIZE: f32 = 18.0;

    /// Segments shorter than this are treated as points and never collide
    pub const DEGENERATE_SEGMENT_EPSILON: f32 = 1e-6;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(std::f32::consts::TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= std::f32::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
