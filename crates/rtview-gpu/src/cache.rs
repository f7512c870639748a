//! Frame-to-texture cache.
//!
//! Avoids re-creating GPU textures for every incoming frame. The cache is
//! keyed by the frame's backing-memory identity and plane geometry:
//! rendering the same frame twice re-uses the textures as-is, a new frame
//! of identical geometry re-uploads into the existing textures, and a
//! geometry change recreates them. A single entry suffices since exactly
//! one frame is live at a time.

use std::sync::Arc;

use rtview_core::{PlanarYuvFrame, RenderError, Result};

use crate::texture::PlaneTexture;

/// Identity of an uploaded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrameKey {
    /// Address of the luma plane's backing allocation.
    luma_ptr: usize,
    sequence: u64,
    luma_size: (u32, u32),
    chroma_size: (u32, u32),
}

impl FrameKey {
    fn of(frame: &PlanarYuvFrame) -> Self {
        Self {
            luma_ptr: Arc::as_ptr(&frame.luma.data) as *const u8 as usize,
            sequence: frame.sequence,
            luma_size: (frame.luma.width, frame.luma.height),
            chroma_size: (frame.chroma.width, frame.chroma.height),
        }
    }

    fn same_geometry(&self, other: &Self) -> bool {
        self.luma_size == other.luma_size && self.chroma_size == other.chroma_size
    }
}

/// The pair of plane textures for the current frame.
pub struct FrameTextures {
    pub luma: PlaneTexture,
    pub chroma: PlaneTexture,
    key: FrameKey,
}

/// Cache mapping the live frame to its GPU textures.
#[derive(Default)]
pub struct PlaneTextureCache {
    entry: Option<FrameTextures>,
}

impl PlaneTextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload a frame's planes, reusing cached textures where possible.
    ///
    /// Rejects frames whose chroma plane is not exactly half the luma
    /// width, the shape the fragment shader's two-texture sampling is
    /// built around. On any upload failure the stale entry is discarded
    /// so a partial texture pair can never be drawn.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        frame: &PlanarYuvFrame,
    ) -> Result<&FrameTextures> {
        if !frame.has_half_width_chroma() {
            return Err(RenderError::UnsupportedFormat(format!(
                "chroma plane width {} is not half the luma plane width {}",
                frame.chroma.width, frame.luma.width
            )));
        }

        let key = FrameKey::of(frame);

        enum Plan {
            /// Same backing memory and sequence: textures already hold it.
            Reuse,
            /// Same geometry: keep the texture objects, refresh the bytes.
            Refresh,
            Recreate,
        }

        let plan = match &self.entry {
            Some(cached) if cached.key == key => Plan::Reuse,
            Some(cached) if cached.key.same_geometry(&key) => Plan::Refresh,
            _ => Plan::Recreate,
        };

        match plan {
            Plan::Reuse => {}
            Plan::Refresh => {
                if let Err(e) = self.refresh(queue, frame, key) {
                    self.entry = None;
                    return Err(e);
                }
            }
            Plan::Recreate => {
                self.entry = None;
                let textures = Self::create(device, queue, frame, key)?;
                self.entry = Some(textures);
            }
        }

        Ok(self.entry.as_ref().expect("entry populated above"))
    }

    /// Drop the cached textures.
    pub fn clear(&mut self) {
        self.entry = None;
    }

    fn refresh(&mut self, queue: &wgpu::Queue, frame: &PlanarYuvFrame, key: FrameKey) -> Result<()> {
        let entry = self.entry.as_mut().expect("refresh requires an entry");
        entry.luma.upload(queue, &frame.luma, 1)?;
        entry.chroma.upload(queue, &frame.chroma, 2)?;
        entry.key = key;
        Ok(())
    }

    fn create(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        frame: &PlanarYuvFrame,
        key: FrameKey,
    ) -> Result<FrameTextures> {
        let luma = PlaneTexture::new(
            device,
            frame.luma.width,
            frame.luma.height,
            wgpu::TextureFormat::R8Unorm,
            "rtview luma plane",
        );
        let chroma = PlaneTexture::new(
            device,
            frame.chroma.width,
            frame.chroma.height,
            wgpu::TextureFormat::Rg8Unorm,
            "rtview chroma plane",
        );

        luma.upload(queue, &frame.luma, 1)?;
        chroma.upload(queue, &frame.chroma, 2)?;

        Ok(FrameTextures { luma, chroma, key })
    }
}
