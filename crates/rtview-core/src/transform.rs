//! Model-view transform composition.
//!
//! Builds the single matrix uploaded to the GPU each frame. World space is
//! chosen so one unit equals one destination pixel, which keeps the
//! fit/fill arithmetic readable: the unit quad is scaled up to the frame's
//! native pixel size, scaled to the drawable, then projected back down by
//! the camera.

use glam::{Mat4, Vec3};

use crate::settings::{DisplayMode, DisplaySettings};

/// Compute the fit/fill scale factor for the given rotation.
///
/// `scale_x`/`scale_y` are the factors that map the frame's width/height
/// onto the drawable's; the inverse pair maps them onto the *other*
/// drawable dimension, which is what constrains the frame once it is
/// rotated a quarter turn. The two candidates are blended by
/// `|cos| * scale + |sin| * inverse_scale` so the chosen scale degrades
/// continuously as the rotation sweeps through intermediate angles
/// instead of snapping at 45 degrees.
pub fn fit_fill_scale(
    settings: &DisplaySettings,
    frame_width: f32,
    frame_height: f32,
    drawable_width: f32,
    drawable_height: f32,
) -> f32 {
    let rot = settings.rotation_degrees.to_radians();

    let scale_y = drawable_height / frame_height;
    let inverse_scale_y = drawable_width / frame_height;
    let scale_x = drawable_width / frame_width;
    let inverse_scale_x = drawable_height / frame_width;

    let (scale, inverse_scale) = match settings.display_mode {
        DisplayMode::AspectFit => (scale_y.min(scale_x), inverse_scale_y.min(inverse_scale_x)),
        DisplayMode::AspectFill => (scale_y.max(scale_x), inverse_scale_y.max(inverse_scale_x)),
    };

    rot.cos().abs() * scale + rot.sin().abs() * inverse_scale
}

/// Compose the full model-view matrix for one frame.
///
/// Pure and deterministic. Mirroring and rotation act in the frame's own
/// local space before the frame is scaled to destination size and
/// projected into camera space, so the composition order is load-bearing:
/// `camera * (rotation * mirror * original_size * fit_fill)`.
pub fn compose(
    settings: &DisplaySettings,
    frame_width: f32,
    frame_height: f32,
    drawable_width: f32,
    drawable_height: f32,
) -> Mat4 {
    // One world unit = one destination pixel.
    let camera = Mat4::from_scale(Vec3::new(1.0 / drawable_width, 1.0 / drawable_height, 1.0));

    let rot = settings.rotation_degrees.to_radians();
    let rotation = Mat4::from_rotation_z(rot);

    // Scale the unit quad up to the frame's native pixel dimensions.
    let original_size = Mat4::from_scale(Vec3::new(frame_width, frame_height, 1.0));

    let rotated_scale = fit_fill_scale(
        settings,
        frame_width,
        frame_height,
        drawable_width,
        drawable_height,
    );
    let fit_fill = Mat4::from_scale(Vec3::new(rotated_scale, rotated_scale, 1.0));

    let mirror = if settings.mirror_horizontally {
        Mat4::from_scale(Vec3::new(-1.0, 1.0, 1.0))
            * Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0))
    } else {
        Mat4::IDENTITY
    };

    let model = rotation * mirror * original_size * fit_fill;
    camera * model
}
