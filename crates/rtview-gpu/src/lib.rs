//! rtview GPU backend - wgpu-based video rendering
//!
//! Uploads biplanar YUV planes as two GPU textures and draws one textured
//! quad per frame, converting to RGB in the fragment shader.

pub mod cache;
pub mod context;
pub mod pipeline;
pub mod renderer;
pub mod texture;

pub use cache::PlaneTextureCache;
pub use context::GpuContext;
pub use pipeline::VideoPipeline;
pub use renderer::GpuRenderer;
pub use texture::PlaneTexture;
