use super::error::InitError;
use super::shader::ResolvedProgram;
use super::vertex::{Vertex, VERTEX_COUNT};

/// Render-pass description for one frame: how the color attachment starts out.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PassDescriptor {
    pub clear: wgpu::Color,
}

impl Default for PassDescriptor {
    fn default() -> Self {
        Self {
            clear: wgpu::Color::BLACK,
        }
    }
}

/// What the host hands the renderer for one display tick.
///
/// Either half may be missing (surface lost, window minimized); the renderer
/// then skips the frame.
pub struct FrameTarget<D> {
    pub drawable: Option<D>,
    pub pass: Option<PassDescriptor>,
}

impl<D> FrameTarget<D> {
    pub fn new(drawable: Option<D>, pass: Option<PassDescriptor>) -> Self {
        Self { drawable, pass }
    }

    /// A target with nothing to draw into.
    pub fn empty() -> Self {
        Self {
            drawable: None,
            pass: None,
        }
    }
}

/// GPU operations the triangle renderer needs.
///
/// The device handle lives inside the implementor. Pipeline and buffer handles
/// are returned to the renderer, which owns them and drops them with itself.
pub trait RenderBackend {
    type Pipeline;
    type VertexBuffer;
    type Drawable;

    /// Links both shader stages into a pipeline writing `format`.
    fn create_pipeline(
        &mut self,
        program: &ResolvedProgram<'_>,
        format: wgpu::TextureFormat,
    ) -> Result<Self::Pipeline, InitError>;

    /// Allocates a buffer for exactly one triangle and uploads `initial`.
    fn create_vertex_buffer(
        &mut self,
        initial: &[Vertex; VERTEX_COUNT],
    ) -> Result<Self::VertexBuffer, InitError>;

    /// Overwrites the whole buffer in place.
    fn write_vertices(&mut self, buffer: &Self::VertexBuffer, vertices: &[Vertex; VERTEX_COUNT]);

    /// Encodes one draw of the triangle into `drawable`, submits it and presents.
    fn submit_frame(
        &mut self,
        pipeline: &Self::Pipeline,
        buffer: &Self::VertexBuffer,
        drawable: Self::Drawable,
        pass: &PassDescriptor,
    );
}
