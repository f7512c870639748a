//! The GPU-backed frame renderer.

use std::sync::Arc;

use rtview_core::{
    compose, Backend, DrawableSize, FrameRenderer, RenderError, RenderOutcome, Result, ViewState,
};
use tracing::{debug, info};

use crate::cache::PlaneTextureCache;
use crate::context::GpuContext;
use crate::pipeline::VideoPipeline;

/// Renders the shared view state into a wgpu surface.
///
/// All GPU resources are created here, once, and dropped with the
/// renderer. Per frame it snapshots the latest frame and settings,
/// uploads planes through the cache, composes the transform against the
/// *current* drawable size, and issues one quad draw.
pub struct GpuRenderer {
    state: Arc<ViewState>,
    size_source: Arc<dyn DrawableSize>,
    context: GpuContext,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    pipeline: VideoPipeline,
    cache: PlaneTextureCache,
}

impl GpuRenderer {
    /// Probe for a GPU and build the full pipeline against the given
    /// surface target.
    ///
    /// Any failure here (no adapter, no device, surface rejection,
    /// shader or pipeline validation) is returned for the selector to
    /// degrade to the CPU fallback.
    pub fn new(
        state: Arc<ViewState>,
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        size_source: Arc<dyn DrawableSize>,
    ) -> Result<Self> {
        let instance = GpuContext::instance();
        let surface = instance.create_surface(target).map_err(|e| {
            debug!("surface creation failed: {e}");
            RenderError::SurfaceUnavailable
        })?;

        let context = GpuContext::new_blocking(instance, Some(&surface))?;

        let capabilities = surface.get_capabilities(&context.adapter);
        let format = capabilities
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(capabilities.formats[0]);

        let (width, height) = size_source.drawable_size();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: capabilities.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&context.device, &config);

        let pipeline = VideoPipeline::new(&context.device, format)?;

        info!(?format, "GPU renderer ready");

        Ok(Self {
            state,
            size_source,
            context,
            surface,
            config,
            pipeline,
            cache: PlaneTextureCache::new(),
        })
    }

    /// Reconfigure the surface if the drawable size changed since the
    /// last frame. Returns the current size, or None when there is no
    /// drawable to present to.
    fn sync_surface_size(&mut self) -> Option<(u32, u32)> {
        let (width, height) = self.size_source.drawable_size();
        if width == 0 || height == 0 {
            return None;
        }
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.context.device, &self.config);
        }
        Some((width, height))
    }
}

impl FrameRenderer for GpuRenderer {
    fn render_frame(&mut self) -> Result<RenderOutcome> {
        // Drawable size is re-read every draw, never cached across frames.
        let Some((drawable_width, drawable_height)) = self.sync_surface_size() else {
            return Ok(RenderOutcome::SurfaceLost);
        };

        let Some(frame) = self.state.frame() else {
            return Ok(RenderOutcome::NoFrame);
        };
        let settings = self.state.settings();

        let textures = self
            .cache
            .upload(&self.context.device, &self.context.queue, &frame)?;

        let (frame_width, frame_height) = frame.dimensions();
        let transform = compose(
            &settings,
            frame_width as f32,
            frame_height as f32,
            drawable_width as f32,
            drawable_height as f32,
        );
        self.pipeline.write_frame_data(&self.context.queue, &transform);

        let drawable = match self.surface.get_current_texture() {
            Ok(drawable) => drawable,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // The next frame reconfigures against the fresh size.
                self.surface.configure(&self.context.device, &self.config);
                return Ok(RenderOutcome::SurfaceLost);
            }
            Err(e) => {
                debug!("no drawable this cycle: {e}");
                return Ok(RenderOutcome::SurfaceLost);
            }
        };

        let target = drawable
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = self
            .pipeline
            .bind(&self.context.device, &textures.luma, &textures.chroma);

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("rtview frame encoder"),
            });
        self.pipeline.draw(&mut encoder, &target, &bind_group);

        self.context.queue.submit(Some(encoder.finish()));
        drawable.present();

        Ok(RenderOutcome::Rendered)
    }

    fn backend(&self) -> Backend {
        Backend::Gpu
    }
}
