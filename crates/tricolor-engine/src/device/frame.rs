/// Represents a single acquired frame: the drawable for one display tick.
///
/// This object is short-lived and must be finalized promptly. Holding the surface
/// texture prevents acquisition of subsequent frames.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// What to do after a frame could not be acquired.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next tick should get a drawable.
    Reconfigured,
    /// Transient error; skip this tick.
    SkipFrame,
    /// Unrecoverable (commonly OOM); shut down.
    Fatal,
}
