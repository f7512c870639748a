//! GPU context management.

use rtview_core::{RenderError, Result};
use std::sync::Arc;
use tracing::info;

/// GPU context holding device and queue.
///
/// Created exactly once per renderer; its failure path is "construct
/// nothing and let the selector fall back", never a runtime retry.
pub struct GpuContext {
    pub instance: wgpu::Instance,
    pub adapter: wgpu::Adapter,
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
}

impl GpuContext {
    /// The instance a renderer should create its surface from.
    pub fn instance() -> wgpu::Instance {
        #[cfg(target_os = "macos")]
        let backends = wgpu::Backends::METAL;
        #[cfg(not(target_os = "macos"))]
        let backends = wgpu::Backends::VULKAN | wgpu::Backends::DX12;

        wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        })
    }

    /// Probe for a GPU and create a context on it.
    ///
    /// Passing the surface the renderer will present to ensures the
    /// selected adapter can actually drive it.
    pub async fn new(
        instance: wgpu::Instance,
        compatible_surface: Option<&wgpu::Surface<'_>>,
    ) -> Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface,
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| {
                RenderError::DeviceUnavailable("no suitable GPU adapter found".to_string())
            })?;

        info!("using GPU adapter: {:?}", adapter.get_info());

        // Video planes stay well inside default limits; nothing extra to ask for.
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("rtview device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                },
                None,
            )
            .await
            .map_err(|e| {
                RenderError::DeviceUnavailable(format!("failed to create device: {e}"))
            })?;

        Ok(Self {
            instance,
            adapter,
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }

    /// Blocking version of [`GpuContext::new`].
    pub fn new_blocking(
        instance: wgpu::Instance,
        compatible_surface: Option<&wgpu::Surface<'_>>,
    ) -> Result<Self> {
        pollster::block_on(Self::new(instance, compatible_surface))
    }

    /// Get adapter info.
    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.adapter.get_info()
    }
}
