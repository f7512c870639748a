//! Single-plane GPU textures.

use std::borrow::Cow;

use rtview_core::{FramePlane, RenderError, Result};

/// wgpu requires `bytes_per_row` in buffer-to-texture copies to be a
/// multiple of this.
const COPY_BYTES_PER_ROW_ALIGNMENT: u32 = 256;

fn align_up(value: u32, alignment: u32) -> u32 {
    (value + alignment - 1) & !(alignment - 1)
}

/// Pad plane rows to the copy alignment. Borrows the source bytes when
/// the stride already satisfies it, copies row-by-row otherwise.
fn pad_plane_rows(plane: &FramePlane, row_bytes: usize) -> (u32, Cow<'_, [u8]>) {
    let stride = plane.stride as u32;
    let aligned = align_up(stride, COPY_BYTES_PER_ROW_ALIGNMENT);

    if aligned == stride {
        return (stride, Cow::Borrowed(&plane.data));
    }

    let mut padded = Vec::with_capacity((aligned as usize) * plane.height as usize);
    for y in 0..plane.height {
        let start = y as usize * plane.stride;
        padded.extend_from_slice(&plane.data[start..start + row_bytes]);
        padded.resize(padded.len() + (aligned as usize - row_bytes), 0);
    }
    (aligned, Cow::Owned(padded))
}

/// A GPU texture holding one plane of a video frame.
pub struct PlaneTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
    pub format: wgpu::TextureFormat,
}

impl PlaneTexture {
    /// Create a texture sized for one plane.
    pub fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        label: &str,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            width,
            height,
            format,
        }
    }

    /// Upload one frame plane into this texture.
    ///
    /// `bytes_per_pixel` is 1 for the luma plane (R8) and 2 for the
    /// interleaved chroma plane (RG8).
    pub fn upload(
        &self,
        queue: &wgpu::Queue,
        plane: &FramePlane,
        bytes_per_pixel: usize,
    ) -> Result<()> {
        if plane.width != self.width || plane.height != self.height {
            return Err(RenderError::TextureUpload(format!(
                "plane size {}x{} does not match texture size {}x{}",
                plane.width, plane.height, self.width, self.height
            )));
        }

        let row_bytes = plane.width as usize * bytes_per_pixel;
        if row_bytes > plane.stride {
            return Err(RenderError::TextureUpload(format!(
                "plane stride {} too small for {} bytes per row",
                plane.stride, row_bytes
            )));
        }

        let (bytes_per_row, data) = pad_plane_rows(plane, row_bytes);

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &data,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(bytes_per_row),
                rows_per_image: Some(self.height),
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );

        Ok(())
    }
}
