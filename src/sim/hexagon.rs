//! Rotating hexagon container geometry
//!
//! The hexagon is described by center, radius and rotation only. Vertices and
//! edges are derived on demand, so they always reflect the current rotation.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::consts::*;
use crate::draw::{Color, Frame, colors};
use crate::{polar_to_cartesian, wrap_angle};

/// A finite line segment from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }

    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }
}

/// Vertices of a regular hexagon
///
/// `vertices[i] = center + radius * (cos(rotation + i*60°), sin(rotation + i*60°))`
pub fn hexagon_vertices(center: Vec2, radius: f32, rotation: f32) -> [Vec2; HEX_SIDES] {
    std::array::from_fn(|i| {
        let angle = rotation + i as f32 * (TAU / HEX_SIDES as f32);
        center + polar_to_cartesian(radius, angle)
    })
}

/// The rotating container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hexagon {
    pub center: Vec2,
    /// Center-to-vertex distance
    pub radius: f32,
    /// Current rotation (radians, wrapped to [0, 2π))
    pub rotation: f32,
    /// Rotation added per frame
    pub rotation_speed: f32,
    pub color: Color,
}

impl Hexagon {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            rotation: 0.0,
            rotation_speed: ROTATION_SPEED,
            color: colors::BLUE,
        }
    }

    /// Rotate by one frame's worth of angular velocity
    pub fn advance(&mut self) {
        self.rotation = wrap_angle(self.rotation + self.rotation_speed);
    }

    pub fn vertices(&self) -> [Vec2; HEX_SIDES] {
        hexagon_vertices(self.center, self.radius, self.rotation)
    }

    /// The six edges in vertex order, wrapping from the last vertex to the first
    pub fn edges(&self) -> impl Iterator<Item = Segment> {
        let vertices = self.vertices();
        (0..HEX_SIDES).map(move |i| Segment::new(vertices[i], vertices[(i + 1) % HEX_SIDES]))
    }

    /// Distance from the center to the middle of each edge
    pub fn apothem(&self) -> f32 {
        self.radius * (TAU / (2.0 * HEX_SIDES as f32)).cos()
    }

    pub fn render(&self, frame: &mut Frame) {
        frame.polygon_outline(&self.vertices(), self.color, OUTLINE_WIDTH);
    }
}
