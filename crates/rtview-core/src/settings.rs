//! Display settings applied while rendering.

use serde::{Deserialize, Serialize};

/// How the frame is scaled to the drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Fit the whole frame inside the drawable (possible letterboxing).
    #[default]
    AspectFit,
    /// Fill the drawable completely (possible cropping).
    AspectFill,
}

/// Externally mutable view settings.
///
/// A value type: callers replace the whole struct and the renderer always
/// draws with the most recently set value. Rotation accepts any degree
/// value; it feeds trigonometric functions directly, so no wrapping is
/// needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Flip the image left-to-right (selfie view).
    pub mirror_horizontally: bool,
    /// Screen-plane rotation in degrees.
    pub rotation_degrees: f32,
    /// Aspect-fit or aspect-fill scaling.
    pub display_mode: DisplayMode,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            mirror_horizontally: false,
            rotation_degrees: 0.0,
            display_mode: DisplayMode::AspectFit,
        }
    }
}
