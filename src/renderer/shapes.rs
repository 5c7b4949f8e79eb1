//! Shape generation for 2D primitives
//!
//! Everything is tessellated into plain colored triangles in logical screen
//! pixels; the pipeline maps them to clip space.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::draw::{Color, DrawCommand, Frame, colors};

/// Triangle-fan resolution for filled circles
pub const CIRCLE_SEGMENTS: u32 = 32;
/// Resolution of the round caps filling outline joints
const JOINT_SEGMENTS: u32 = 8;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a thick line segment
pub fn line(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = dir.perp() * (width / 2.0);

    let a1 = a + perp;
    let a2 = a - perp;
    let b1 = b + perp;
    let b2 = b - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Generate vertices for a closed polygon outline
///
/// One quad per edge, with a small disc at every vertex so joints have no
/// notches.
pub fn polygon_outline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity(points.len() * (6 + JOINT_SEGMENTS as usize * 3));
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        vertices.extend(line(a, b, width, color));
        vertices.extend(circle(a, width / 2.0, color, JOINT_SEGMENTS));
    }

    vertices
}

/// Triangles for a whole frame, plus the color to clear the target with
#[derive(Debug, Clone)]
pub struct Tessellation {
    pub clear: [f32; 4],
    pub vertices: Vec<Vertex>,
}

/// Tessellate a frame's draw list in command order
///
/// `linear` selects linear-light colors for sRGB render targets. The last
/// `Clear` in the frame wins; a frame without one clears to black. Text is
/// left to [`super::overlay`].
pub fn tessellate(frame: &Frame, linear: bool) -> Tessellation {
    let convert = |c: Color| if linear { c.to_linear() } else { c.to_srgb() };

    let mut clear = convert(colors::BLACK);
    let mut vertices = Vec::new();

    for command in frame.commands() {
        match command {
            DrawCommand::Clear(color) => {
                // Clearing discards everything drawn before it
                clear = convert(*color);
                vertices.clear();
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => vertices.extend(circle(*center, *radius, convert(*color), CIRCLE_SEGMENTS)),
            DrawCommand::PolygonOutline {
                points,
                color,
                width,
            } => vertices.extend(polygon_outline(points, *width, convert(*color))),
            // Painted by the egui overlay
            DrawCommand::Text { .. } => {}
        }
    }

    Tessellation { clear, vertices }
}
