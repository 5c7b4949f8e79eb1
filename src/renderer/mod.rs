//! wgpu rendering module
//!
//! Frame geometry is tessellated on the CPU into colored triangles and drawn
//! with a single pass-through pipeline. Overlay text goes through egui in the
//! same render pass.

pub mod overlay;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::{Tessellation, tessellate};
pub use vertex::Vertex;
