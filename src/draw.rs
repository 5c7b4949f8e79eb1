//! Backend-agnostic draw list
//!
//! The simulation renders into a [`Frame`]: an ordered list of primitive
//! commands. The wgpu renderer consumes it, and tests inspect it directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized sRGB components, alpha = 1
    pub fn to_srgb(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }

    /// Linear-light components for an sRGB render target, alpha = 1
    pub fn to_linear(self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            1.0,
        ]
    }
}

fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Scene palette
pub mod colors {
    use super::Color;

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const BLUE: Color = Color::rgb(65, 105, 225);
    pub const RED: Color = Color::rgb(255, 107, 107);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// A single drawing primitive, in logical screen pixels (origin top-left, y down)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear(Color),
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Closed outline through `points` (last point joins the first)
    PolygonOutline {
        points: Vec<Vec2>,
        color: Color,
        width: f32,
    },
    /// Single line of text with its top-left corner at `pos`
    Text {
        text: String,
        pos: Vec2,
        color: Color,
    },
}

/// Ordered draw list for one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_background(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    pub fn polygon_outline(&mut self, points: &[Vec2], color: Color, width: f32) {
        self.commands.push(DrawCommand::PolygonOutline {
            points: points.to_vec(),
            color,
            width,
        });
    }

    pub fn text(&mut self, text: impl Into<String>, pos: Vec2, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            pos,
            color,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
