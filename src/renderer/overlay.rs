//! Text overlay drawn with egui
//!
//! `Text` commands from a [`Frame`] are laid out by egui and painted on top
//! of the flat-colored geometry, inside the same render pass.

use std::sync::Arc;

use glam::Vec2;
use winit::window::Window;

use crate::consts::OVERLAY_FONT_SIZE;
use crate::draw::{Color, DrawCommand, Frame};

/// One line of overlay text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextItem<'a> {
    pub text: &'a str,
    pub pos: Vec2,
    pub color: Color,
}

/// Text commands still visible at the end of the frame
///
/// A `Clear` wipes everything before it, text included.
pub fn visible_text(frame: &Frame) -> Vec<TextItem<'_>> {
    let mut items = Vec::new();
    for command in frame.commands() {
        match command {
            DrawCommand::Clear(_) => items.clear(),
            DrawCommand::Text { text, pos, color } => items.push(TextItem {
                text,
                pos: *pos,
                color: *color,
            }),
            _ => {}
        }
    }
    items
}

fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// Paint the frame's text onto egui's background layer
///
/// egui points map one to one onto the logical scene pixels.
pub fn paint(ctx: &egui::Context, frame: &Frame) {
    let painter = ctx.layer_painter(egui::LayerId::background());
    for item in visible_text(frame) {
        painter.text(
            egui::pos2(item.pos.x, item.pos.y),
            egui::Align2::LEFT_TOP,
            item.text,
            egui::FontId::proportional(OVERLAY_FONT_SIZE),
            to_color32(item.color),
        );
    }
}

/// Tessellated overlay ready for the GPU
pub struct OverlayOutput {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub screen: egui_wgpu::ScreenDescriptor,
    /// Command buffers from paint callbacks, submitted before the frame's own
    pub callback_commands: Vec<wgpu::CommandBuffer>,
}

/// egui context, winit input state and wgpu renderer for the overlay
pub struct TextOverlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl TextOverlay {
    pub fn new(device: &wgpu::Device, output_format: wgpu::TextureFormat, window: &Arc<Window>) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window.as_ref(),
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer =
            egui_wgpu::Renderer::new(device, output_format, egui_wgpu::RendererOptions::default());

        Self { ctx, state, renderer }
    }

    /// Lay out the frame's text and upload textures and buffers
    ///
    /// Must run before the render pass that draws the overlay is opened.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        window: &Window,
        size_in_pixels: [u32; 2],
        frame: &Frame,
    ) -> OverlayOutput {
        let raw_input = self.state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, |ctx| paint(ctx, frame));
        self.state
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }
        let callback_commands = self
            .renderer
            .update_buffers(device, queue, encoder, &paint_jobs, &screen);

        OverlayOutput {
            paint_jobs,
            textures_delta: full_output.textures_delta,
            screen,
            callback_commands,
        }
    }

    pub fn render(&self, render_pass: &mut wgpu::RenderPass<'static>, output: &OverlayOutput) {
        self.renderer
            .render(render_pass, &output.paint_jobs, &output.screen);
    }

    /// Free textures egui no longer needs, after the frame is submitted
    pub fn cleanup(&mut self, output: &OverlayOutput) {
        for id in &output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}
