//! Error types for rtview.

use thiserror::Error;

/// Main error type for rendering operations.
///
/// Nothing in here is fatal to the process: device and pipeline failures
/// degrade to the CPU fallback at construction time, and every per-frame
/// failure drops at most that one frame.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("no suitable GPU device: {0}")]
    DeviceUnavailable(String),

    #[error("pipeline construction failed: {0}")]
    PipelineConstruction(String),

    #[error("unsupported frame format: {0}")]
    UnsupportedFormat(String),

    #[error("no drawable surface available")]
    SurfaceUnavailable,

    #[error("texture upload failed: {0}")]
    TextureUpload(String),
}

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
