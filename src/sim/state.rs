//! Simulation state and core types
//!
//! Everything the frame loop mutates lives in [`SimState`], created once at
//! startup and owned by the app loop.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hexagon::Hexagon;
use crate::consts::*;
use crate::draw::{Color, Frame, colors};

/// The bouncing ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center, in screen pixels
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    /// Fixed for the lifetime of the simulation
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive");
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            color: colors::RED,
        }
    }

    /// Advance one frame: gravity, then friction on both axes, then motion
    pub fn integrate(&mut self) {
        self.vel.y += GRAVITY;
        self.vel = apply_friction(self.vel);
        self.pos += self.vel;
    }

    /// Draw position, truncated to whole pixels
    pub fn draw_pos(&self) -> Vec2 {
        self.pos.trunc()
    }

    pub fn render(&self, frame: &mut Frame) {
        frame.fill_circle(self.draw_pos(), self.radius, self.color);
    }
}

/// Per-frame velocity damping
#[inline]
pub fn apply_friction(vel: Vec2) -> Vec2 {
    vel * FRICTION
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub ball: Ball,
    pub hexagon: Hexagon,
    /// Frames simulated so far
    pub frame: u64,
    /// Bounces resolved so far
    pub bounces: u64,
}

impl SimState {
    /// Standard scene: container and ball centered in the default window
    pub fn new() -> Self {
        Self::centered_in(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    /// Scene centered in a `width` x `height` surface
    pub fn centered_in(width: u32, height: u32) -> Self {
        // Integer halving keeps the center on a whole pixel
        let center = Vec2::new((width / 2) as f32, (height / 2) as f32);
        let mut ball = Ball::new(center, BALL_RADIUS);
        ball.vel = INITIAL_VELOCITY;

        Self {
            ball,
            hexagon: Hexagon::new(center, HEXAGON_RADIUS),
            frame: 0,
            bounces: 0,
        }
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCommand;
    use proptest::prelude::*;

    #[test]
    fn test_new_state_is_centered() {
        let state = SimState::new();
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.hexagon.center, state.ball.pos);
        assert_eq!(state.ball.vel, INITIAL_VELOCITY);
        assert_eq!(state.ball.radius, BALL_RADIUS);
        assert_eq!(state.hexagon.rotation, 0.0);
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_odd_dimensions_center_on_whole_pixel() {
        let state = SimState::centered_in(801, 601);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_integrate_from_rest() {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), 10.0);
        ball.integrate();

        assert_eq!(ball.vel.x, 0.0);
        assert!((ball.vel.y - GRAVITY * FRICTION).abs() < 1e-6);
        assert!((ball.pos.y - (100.0 + GRAVITY * FRICTION)).abs() < 1e-5);
    }

    #[test]
    fn test_integrate_order() {
        // Gravity is added before friction, and position uses the damped velocity
        let mut ball = Ball::new(Vec2::ZERO, 10.0);
        ball.vel = Vec2::new(5.0, -8.0);
        ball.integrate();

        let expected_vel = Vec2::new(5.0 * FRICTION, (-8.0 + GRAVITY) * FRICTION);
        assert!((ball.vel - expected_vel).length() < 1e-5);
        assert!((ball.pos - expected_vel).length() < 1e-5);
    }

    #[test]
    fn test_render_truncates_position() {
        let ball = Ball::new(Vec2::new(10.7, 20.9), 15.0);
        let mut frame = Frame::new();
        ball.render(&mut frame);

        assert_eq!(
            frame.commands()[0],
            DrawCommand::FillCircle {
                center: Vec2::new(10.0, 20.0),
                radius: 15.0,
                color: colors::RED,
            }
        );
    }

    #[test]
    fn test_state_json_snapshot() {
        let state = SimState::new();
        let json = serde_json::to_string(&state).unwrap();
        let restored: SimState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.ball.pos, state.ball.pos);
        assert_eq!(restored.hexagon.color, colors::BLUE);
    }

    proptest! {
        #[test]
        fn prop_friction_never_adds_speed(vx in -100.0f32..100.0, vy in -100.0f32..100.0) {
            let vel = Vec2::new(vx, vy);
            prop_assert!(apply_friction(vel).length() <= vel.length());
        }

        #[test]
        fn prop_integrate_is_damped_gravity_step(vx in -50.0f32..50.0, vy in -50.0f32..50.0) {
            let mut ball = Ball::new(Vec2::ZERO, 10.0);
            ball.vel = Vec2::new(vx, vy);
            ball.integrate();

            // Speed never exceeds that of the gravity-boosted velocity before damping
            let boosted = Vec2::new(vx, vy + GRAVITY);
            prop_assert!(ball.vel.length() <= boosted.length() + 1e-4);
            prop_assert!((ball.vel.y - boosted.y * FRICTION).abs() < 1e-4);
        }
    }
}
