//! Capability probe and renderer selection.

use std::sync::Arc;

use rtview_core::{Backend, DrawableSize, FrameRenderer, RenderOutcome, Result, ViewState};
use rtview_gpu::GpuRenderer;
use tracing::warn;

use crate::cpu::CpuRenderer;

/// The renderer a view ended up with.
///
/// Selected exactly once at construction; there is no re-probe or
/// runtime re-selection afterwards.
pub enum ActiveRenderer {
    Gpu(GpuRenderer),
    Cpu(CpuRenderer),
}

impl FrameRenderer for ActiveRenderer {
    fn render_frame(&mut self) -> Result<RenderOutcome> {
        match self {
            Self::Gpu(r) => r.render_frame(),
            Self::Cpu(r) => r.render_frame(),
        }
    }

    fn backend(&self) -> Backend {
        match self {
            Self::Gpu(r) => r.backend(),
            Self::Cpu(r) => r.backend(),
        }
    }
}

/// Probe for GPU capability and construct a renderer.
///
/// Attempts the full GPU construction chain (device, surface, shader,
/// pipeline, buffers) and degrades to the CPU fallback on any failure.
/// Never fails itself: the fallback constructor is infallible.
pub fn select_renderer(
    state: Arc<ViewState>,
    target: impl Into<wgpu::SurfaceTarget<'static>>,
    size_source: Arc<dyn DrawableSize>,
) -> ActiveRenderer {
    match GpuRenderer::new(state.clone(), target, size_source.clone()) {
        Ok(renderer) => ActiveRenderer::Gpu(renderer),
        Err(e) => {
            warn!("GPU renderer unavailable ({e}); falling back to CPU rendering");
            ActiveRenderer::Cpu(CpuRenderer::new(state, size_source))
        }
    }
}
