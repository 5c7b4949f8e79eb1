//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Convert logical screen pixels (origin top-left, y down) to normalized device coordinates
#[inline]
pub fn screen_to_ndc(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
    (x / width * 2.0 - 1.0, 1.0 - y / height * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_matches_struct() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::desc().array_stride, 24);
    }

    #[test]
    fn test_screen_to_ndc_corners() {
        assert_eq!(screen_to_ndc(0.0, 0.0, 800.0, 600.0), (-1.0, 1.0));
        assert_eq!(screen_to_ndc(800.0, 600.0, 800.0, 600.0), (1.0, -1.0));
        assert_eq!(screen_to_ndc(400.0, 300.0, 800.0, 600.0), (0.0, 0.0));
    }
}
