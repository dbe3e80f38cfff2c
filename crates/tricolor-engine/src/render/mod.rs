//! GPU rendering subsystem.
//!
//! The triangle renderer owns its pipeline and vertex buffer and talks to the
//! device through [`RenderBackend`], implemented for wgpu by [`WgpuBackend`].
//!
//! Convention:
//! - positions are NDC, `+Y` up
//! - colors are straight RGBA, alpha fixed at `1.0`

mod backend;
mod error;
mod shader;
mod triangle;
pub mod vertex;
mod wgpu_backend;

pub use backend::{FrameTarget, PassDescriptor, RenderBackend};
pub use error::{InitError, MissingResource, ShaderStage};
pub use shader::{
    ResolvedProgram, ShaderProgram, DEFAULT_FRAGMENT_ENTRY, DEFAULT_VERTEX_ENTRY, TRIANGLE_WGSL,
};
pub use triangle::{FrameStatus, RendererConfig, TriangleRenderer};
pub use vertex::{animate, Vertex, VERTEX_COUNT};
pub use wgpu_backend::WgpuBackend;
