use crate::color::ColorSource;
use crate::time::{AnimationClock, DEFAULT_FRAME_RATE};

use super::backend::{FrameTarget, PassDescriptor, RenderBackend};
use super::error::{InitError, MissingResource};
use super::shader::ShaderProgram;
use super::vertex::{self, Vertex, VERTEX_COUNT};

/// Renderer configuration.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Frames per second the animation clock steps at.
    ///
    /// `None` lets the host pick (typically the display refresh rate); when the
    /// renderer is built directly it falls back to [`DEFAULT_FRAME_RATE`].
    pub target_frame_rate: Option<u32>,

    /// Shader library and the two entry points to link.
    pub program: ShaderProgram,

    /// Pixel format the pipeline writes. Must match the surface.
    pub color_format: wgpu::TextureFormat,

    /// Background behind the triangle.
    pub clear_color: wgpu::Color,

    /// Clamp incoming colors to `[0, 1]` before upload.
    ///
    /// Off by default: input controls own the range and values pass through.
    pub clamp_colors: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            target_frame_rate: None,
            program: ShaderProgram::default(),
            color_format: wgpu::TextureFormat::Bgra8Unorm,
            clear_color: wgpu::Color::BLACK,
            clamp_colors: false,
        }
    }
}

impl RendererConfig {
    /// Render-pass description every frame uses.
    pub fn pass(&self) -> PassDescriptor {
        PassDescriptor {
            clear: self.clear_color,
        }
    }
}

/// What happened to a draw request.
///
/// Informational only; nothing needs handling.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameStatus {
    Presented,
    Skipped(MissingResource),
    Disabled,
}

struct Resources<B: RenderBackend> {
    backend: B,
    pipeline: B::Pipeline,
    vertex_buffer: B::VertexBuffer,
}

enum State<B: RenderBackend> {
    Ready(Resources<B>),
    Disabled(InitError),
}

/// Animated, vertex-colored triangle.
///
/// Construction attempts initialization once. On success the renderer is ready
/// and every [`draw`](Self::draw) advances the animation, rewrites the vertex
/// buffer and presents. On failure it is disabled for good and `draw` does
/// nothing.
///
/// GPU objects are owned here and released when the renderer is dropped.
pub struct TriangleRenderer<B: RenderBackend, S: ColorSource> {
    state: State<B>,
    colors: S,
    clock: AnimationClock,
    vertices: [Vertex; VERTEX_COUNT],
    pass: PassDescriptor,
    clamp_colors: bool,
}

impl<B: RenderBackend, S: ColorSource> TriangleRenderer<B, S> {
    /// Builds the pipeline and vertex buffer on `device`.
    ///
    /// `device` is the outcome of device acquisition; an `Err` there disables
    /// the renderer like any other initialization failure. Failures are logged
    /// once and not returned.
    pub fn new(device: Result<B, InitError>, colors: S, config: RendererConfig) -> Self {
        let clamp_colors = config.clamp_colors;
        let vertices = vertex::rest(&colors.current(), clamp_colors);
        let frame_rate = config.target_frame_rate.unwrap_or(DEFAULT_FRAME_RATE);

        let state = match device.and_then(|backend| Self::init(backend, &config, &vertices)) {
            Ok(resources) => {
                log::info!(
                    "triangle renderer ready ({:?}, {} fps)",
                    config.color_format,
                    frame_rate.max(1)
                );
                State::Ready(resources)
            }
            Err(err) => {
                log::error!("triangle renderer disabled: {err}");
                State::Disabled(err)
            }
        };

        Self {
            state,
            colors,
            clock: AnimationClock::new(frame_rate),
            vertices,
            pass: config.pass(),
            clamp_colors,
        }
    }

    fn init(
        mut backend: B,
        config: &RendererConfig,
        initial: &[Vertex; VERTEX_COUNT],
    ) -> Result<Resources<B>, InitError> {
        let program = config.program.resolve()?;
        let pipeline = backend.create_pipeline(&program, config.color_format)?;
        let vertex_buffer = backend.create_vertex_buffer(initial)?;
        Ok(Resources {
            backend,
            pipeline,
            vertex_buffer,
        })
    }

    /// Renders one frame into `target`.
    ///
    /// Order: advance the clock and recompute all vertices, then, if both the
    /// drawable and the pass description are present, upload them, draw and
    /// present. A missing piece skips the frame without touching the buffer;
    /// the next call tries again.
    pub fn draw(&mut self, target: FrameTarget<B::Drawable>) -> FrameStatus {
        let State::Ready(res) = &mut self.state else {
            return FrameStatus::Disabled;
        };

        let t = self.clock.advance();
        self.vertices = vertex::animate(t, &self.colors.current(), self.clamp_colors);

        let Some(drawable) = target.drawable else {
            log::trace!("frame {} skipped: no drawable", self.clock.frame_index());
            return FrameStatus::Skipped(MissingResource::Drawable);
        };
        let Some(pass) = target.pass else {
            log::trace!("frame {} skipped: no render pass", self.clock.frame_index());
            return FrameStatus::Skipped(MissingResource::RenderPass);
        };

        // Queue writes land on the next submit; stage one only when a submit follows.
        res.backend.write_vertices(&res.vertex_buffer, &self.vertices);
        res.backend
            .submit_frame(&res.pipeline, &res.vertex_buffer, drawable, &pass);
        FrameStatus::Presented
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// Why initialization failed, if it did.
    pub fn init_error(&self) -> Option<&InitError> {
        match &self.state {
            State::Ready(_) => None,
            State::Disabled(err) => Some(err),
        }
    }

    /// Vertices computed for the latest tick.
    #[inline]
    pub fn vertices(&self) -> &[Vertex; VERTEX_COUNT] {
        &self.vertices
    }

    #[inline]
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Render-pass description hosts should pass back in [`FrameTarget`].
    #[inline]
    pub fn pass(&self) -> PassDescriptor {
        self.pass
    }
}
