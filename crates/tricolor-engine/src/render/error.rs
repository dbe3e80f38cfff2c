use std::fmt;

/// Programmable pipeline stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Why the renderer could not be brought up.
///
/// Any of these leaves the renderer permanently disabled. Nothing retries.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InitError {
    #[error("no GPU device available: {0}")]
    DeviceUnavailable(String),

    #[error("shader library failed to build: {0}")]
    ShaderLibrary(String),

    #[error("{stage} stage `{name}` not found in shader library")]
    MissingShaderStage { stage: ShaderStage, name: String },

    #[error("pipeline creation failed: {0}")]
    PipelineLink(String),
}

/// A per-frame resource that was not available when a draw was requested.
///
/// Pipeline and vertex buffer are not listed: a ready renderer always owns both,
/// and a renderer without them is disabled rather than missing a resource.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MissingResource {
    Drawable,
    RenderPass,
}
