//! Collision detection and response between the ball and hexagon edges
//!
//! Closest-point-on-segment detection, positional correction along the edge
//! normal, and a damped reflection of the normal velocity component.

use glam::Vec2;

use super::hexagon::Segment;
use super::state::Ball;
use crate::consts::{BOUNCE_DAMPING, DEGENERATE_SEGMENT_EPSILON};

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the ball overlaps the segment
    pub hit: bool,
    /// Closest point on the segment to the ball center
    pub point: Vec2,
    /// Segment normal, oriented toward the ball center
    pub normal: Vec2,
    /// Distance from the ball center to `point`
    pub distance: f32,
    /// Overlap depth (`radius - distance`)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            distance: f32::INFINITY,
            penetration: 0.0,
        }
    }
}

/// Closest point on a finite segment to `p`
///
/// Returns `None` for a degenerate (zero-length) segment.
pub fn closest_point_on_segment(p: Vec2, segment: &Segment) -> Option<Vec2> {
    let line = segment.end - segment.start;
    let length = line.length();
    if length < DEGENERATE_SEGMENT_EPSILON {
        return None;
    }

    let dir = line / length;
    let t = (p - segment.start).dot(dir);

    let closest = if t < 0.0 {
        segment.start
    } else if t > length {
        segment.end
    } else {
        segment.start + dir * t
    };
    Some(closest)
}

/// Check a ball (center + radius) against a segment
///
/// Touching counts as a hit (`distance <= radius`).
pub fn ball_segment_collision(ball_pos: Vec2, ball_radius: f32, segment: &Segment) -> CollisionResult {
    let Some(closest) = closest_point_on_segment(ball_pos, segment) else {
        return CollisionResult::miss();
    };

    let offset = ball_pos - closest;
    let distance = offset.length();
    if distance > ball_radius {
        return CollisionResult::miss();
    }

    // Perpendicular to the segment, flipped to face the ball
    let dir = (segment.end - segment.start).normalize();
    let mut normal = dir.perp();
    if normal.dot(offset) < 0.0 {
        normal = -normal;
    }

    CollisionResult {
        hit: true,
        point: closest,
        normal,
        distance,
        penetration: ball_radius - distance,
    }
}

/// Reflect the normal component of `velocity`, keeping `damping` of the reflected impulse
///
/// `v' = v - 2(v·n)n * damping`. The tangential component is untouched.
#[inline]
pub fn reflect_velocity_damped(velocity: Vec2, normal: Vec2, damping: f32) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal * damping
}

/// Resolve a ball against one segment
///
/// Pushes the ball out of the segment and, if it is moving into the segment,
/// reflects its velocity. Returns whether a bounce happened. A ball that
/// overlaps while already separating is pushed out but keeps its velocity.
pub fn resolve(ball: &mut Ball, segment: &Segment) -> bool {
    let result = ball_segment_collision(ball.pos, ball.radius, segment);
    if !result.hit {
        return false;
    }

    ball.pos += result.normal * result.penetration;

    let normal_speed = ball.vel.dot(result.normal);
    if normal_speed < 0.0 {
        ball.vel = reflect_velocity_damped(ball.vel, result.normal, BOUNCE_DAMPING);
        return true;
    }

    false
}
