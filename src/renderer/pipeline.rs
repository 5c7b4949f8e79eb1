//! wgpu render pipeline setup

use std::sync::Arc;

use wgpu::util::DeviceExt;
use winit::window::Window;

use super::overlay::TextOverlay;
use super::shapes::tessellate;
use super::vertex::{Vertex, screen_to_ndc};
use crate::draw::Frame;
use crate::error::AppError;
use crate::settings::Settings;

/// Main render state
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: Option<wgpu::Buffer>,
    pub vertex_count: u32,
    /// Surface size in physical pixels
    pub size: (u32, u32),
    /// Logical scene size that frame coordinates are expressed in
    pub logical_size: (f32, f32),
    pub overlay: TextOverlay,
    window: Arc<Window>,
}

/// Pick the surface format, preferring sRGB
pub fn choose_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first())
        .copied()
}

impl RenderState {
    pub async fn new(window: Arc<Window>, settings: &Settings) -> Result<Self, AppError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(Arc::clone(&window))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("hex-bounce-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format =
            choose_surface_format(&surface_caps.formats).ok_or(AppError::IncompatibleSurface)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .ok_or(AppError::IncompatibleSurface)?;

        log::info!("Using surface format: {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: settings.present_mode(),
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Create shader module
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        // Create pipeline
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("render_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let overlay = TextOverlay::new(&device, surface_format, &window);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer: None,
            vertex_count: 0,
            size: (size.width, size.height),
            logical_size: (settings.width as f32, settings.height as f32),
            overlay,
            window,
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reapply the current configuration after the surface was lost or outdated
    pub fn reconfigure(&mut self) {
        self.resize(self.size.0, self.size.1);
    }

    /// Tessellate a frame, paint its text overlay, upload and present
    pub fn render(&mut self, frame: &Frame) -> Result<(), wgpu::SurfaceError> {
        let tessellation = tessellate(frame, self.config.format.is_srgb());

        // Convert vertices to NDC
        let (w, h) = self.logical_size;
        let ndc_vertices: Vec<Vertex> = tessellation
            .vertices
            .iter()
            .map(|v| {
                let (x, y) = screen_to_ndc(v.position[0], v.position[1], w, h);
                Vertex::new(x, y, v.color)
            })
            .collect();

        // Recreate the buffer every frame; a few thousand vertices at most
        self.vertex_count = ndc_vertices.len() as u32;
        self.vertex_buffer = (!ndc_vertices.is_empty()).then(|| {
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("vertex_buffer"),
                    contents: bytemuck::cast_slice(&ndc_vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                })
        });

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        let mut overlay = self.overlay.prepare(
            &self.device,
            &self.queue,
            &mut encoder,
            &self.window,
            [self.config.width, self.config.height],
            frame,
        );

        let [r, g, b, a] = tessellation.clear;
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some(vertex_buffer) = &self.vertex_buffer {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                render_pass.draw(0..self.vertex_count, 0..1);
            }

            // egui's renderer needs a pass that does not borrow the encoder
            let mut render_pass = render_pass.forget_lifetime();
            self.overlay.render(&mut render_pass, &overlay);
        }

        let callback_commands = std::mem::take(&mut overlay.callback_commands);
        self.queue.submit(
            callback_commands
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );
        output.present();
        self.overlay.cleanup(&overlay);

        Ok(())
    }
}
