//! The video view facade.

use std::sync::Arc;

use rtview_core::{
    Backend, DisplaySettings, DrawableSize, FrameRenderer, PlanarYuvFrame, RenderOutcome, Result,
    ViewState,
};

use crate::cpu::RgbaBitmap;
use crate::select::{select_renderer, ActiveRenderer};

/// Renders video by feeding it biplanar YUV buffers in realtime.
///
/// Construction probes for a GPU once and keeps the chosen backend for
/// the view's lifetime; the external contract is identical either way.
/// Frame and settings updates may come from any thread via
/// [`VideoViewHandle`]; drawing happens wherever the presentation
/// scheduler calls [`VideoView::render_frame`].
pub struct VideoView {
    state: Arc<ViewState>,
    renderer: ActiveRenderer,
}

impl VideoView {
    /// Create a view rendering into the given surface target.
    ///
    /// Never fails: if the GPU path cannot be constructed the view falls
    /// back to CPU rendering.
    pub fn new(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        size_source: Arc<dyn DrawableSize>,
    ) -> Self {
        let state = Arc::new(ViewState::new());
        let renderer = select_renderer(state.clone(), target, size_source);
        Self { state, renderer }
    }

    /// A cloneable handle for pushing frames and settings from producer
    /// threads.
    pub fn handle(&self) -> VideoViewHandle {
        VideoViewHandle {
            state: self.state.clone(),
        }
    }

    /// Replace the current frame.
    pub fn set_frame(&self, frame: PlanarYuvFrame) {
        self.state.set_frame(frame);
    }

    /// Drop the current frame; subsequent draws are no-ops.
    pub fn clear_frame(&self) {
        self.state.clear_frame();
    }

    /// Replace the display settings.
    pub fn set_display_settings(&self, settings: DisplaySettings) {
        self.state.set_settings(settings);
    }

    /// The current display settings.
    pub fn display_settings(&self) -> DisplaySettings {
        self.state.settings()
    }

    /// Which backend the capability probe selected. Diagnostics only.
    pub fn backend(&self) -> Backend {
        self.renderer.backend()
    }

    /// Draw the latest frame with the latest settings.
    pub fn render_frame(&mut self) -> Result<RenderOutcome> {
        self.renderer.render_frame()
    }

    /// The CPU fallback's output bitmap, when the fallback is active and
    /// has rendered at least one frame. The host owns presentation.
    pub fn cpu_bitmap(&self) -> Option<&RgbaBitmap> {
        match &self.renderer {
            ActiveRenderer::Cpu(r) => r.bitmap(),
            ActiveRenderer::Gpu(_) => None,
        }
    }
}

/// Thread-safe producer-side handle to a [`VideoView`].
///
/// Updates are single atomic swaps with latest-value-wins semantics: a
/// frame set before the previous one was drawn replaces it, never queues.
#[derive(Clone)]
pub struct VideoViewHandle {
    state: Arc<ViewState>,
}

impl VideoViewHandle {
    /// Replace the current frame. Safe from any thread.
    pub fn set_frame(&self, frame: PlanarYuvFrame) {
        self.state.set_frame(frame);
    }

    /// Drop the current frame.
    pub fn clear_frame(&self) {
        self.state.clear_frame();
    }

    /// Replace the display settings. Safe from any thread.
    pub fn set_display_settings(&self, settings: DisplaySettings) {
        self.state.set_settings(settings);
    }

    /// The current display settings.
    pub fn display_settings(&self) -> DisplaySettings {
        self.state.settings()
    }
}
