//! Biplanar YUV frame types.
//!
//! A frame references pixel memory owned by the producer (a capture
//! session, a decoder). Planes are `Arc`-shared rather than copied, so a
//! renderer borrows them only for the duration of one render pass and the
//! producer remains free to recycle its buffers by allocation.

use std::sync::Arc;
use std::time::Instant;

use crate::error::{RenderError, Result};

/// One plane of pixel data with stride information.
///
/// The backing memory is shared with the producer; `stride` is the byte
/// distance between rows and may include padding.
#[derive(Debug, Clone)]
pub struct FramePlane {
    /// Raw pixel bytes, at least `stride * height` long.
    pub data: Arc<[u8]>,
    /// Bytes per row (may include padding).
    pub stride: usize,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FramePlane {
    /// Create a plane over shared pixel memory.
    pub fn new(data: Arc<[u8]>, stride: usize, width: u32, height: u32) -> Result<Self> {
        let needed = stride * height as usize;
        if data.len() < needed {
            return Err(RenderError::UnsupportedFormat(format!(
                "plane buffer holds {} bytes, {}x{} rows at stride {} need {}",
                data.len(),
                width,
                height,
                stride,
                needed
            )));
        }
        Ok(Self {
            data,
            stride,
            width,
            height,
        })
    }

    /// Get one row of pixel bytes (stride padding excluded).
    #[inline]
    pub fn row(&self, y: u32, bytes_per_pixel: usize) -> &[u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize * bytes_per_pixel]
    }
}

/// A biplanar YUV video frame.
///
/// Plane 0 is luma (one channel per pixel); plane 1 is chroma (two
/// interleaved channels per sample), at half the luma width and either
/// full (4:2:2) or half (4:2:0) luma height.
#[derive(Debug, Clone)]
pub struct PlanarYuvFrame {
    /// Luma plane, 1 byte per pixel.
    pub luma: FramePlane,
    /// Interleaved Cb/Cr plane, 2 bytes per sample.
    pub chroma: FramePlane,
    /// Monotonically increasing frame number assigned by the producer.
    pub sequence: u64,
    /// Capture timestamp.
    pub timestamp: Instant,
}

impl PlanarYuvFrame {
    /// Create a frame from its two planes.
    ///
    /// The chroma plane may never be wider or taller than the luma plane;
    /// such a buffer is not a biplanar YUV layout this view understands.
    /// The stricter half-width requirement is enforced at upload time.
    pub fn new(luma: FramePlane, chroma: FramePlane, sequence: u64) -> Result<Self> {
        if luma.width == 0 || luma.height == 0 || chroma.width == 0 || chroma.height == 0 {
            return Err(RenderError::UnsupportedFormat(
                "zero-sized plane".to_string(),
            ));
        }
        if chroma.width > luma.width || chroma.height > luma.height {
            return Err(RenderError::UnsupportedFormat(format!(
                "chroma plane {}x{} exceeds luma plane {}x{}",
                chroma.width, chroma.height, luma.width, luma.height
            )));
        }
        Ok(Self {
            luma,
            chroma,
            sequence,
            timestamp: Instant::now(),
        })
    }

    /// Luma plane dimensions, which are the frame's nominal dimensions.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.luma.width, self.luma.height)
    }

    /// Whether the chroma plane is exactly half the luma width, the shape
    /// the two-texture sampling path is built around.
    #[inline]
    pub fn has_half_width_chroma(&self) -> bool {
        self.chroma.width == self.luma.width / 2
    }
}

/// Shared frame reference as handed between producer and renderer.
pub type SharedFrame = Arc<PlanarYuvFrame>;
