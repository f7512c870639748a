//! rtview core - foundation types for the realtime video view
//!
//! This crate provides the types shared by every rendering backend:
//! - Biplanar YUV frame and plane descriptions
//! - Display settings (mirror, rotation, aspect mode)
//! - The shared producer/renderer handoff state
//! - The model-view transform composer
//! - The renderer contract and error taxonomy

pub mod error;
pub mod frame;
pub mod render;
pub mod settings;
pub mod state;
pub mod surface;
pub mod transform;

pub use error::{RenderError, Result};
pub use frame::{FramePlane, PlanarYuvFrame, SharedFrame};
pub use render::{Backend, FrameRenderer, RenderOutcome};
pub use settings::{DisplayMode, DisplaySettings};
pub use state::ViewState;
pub use surface::DrawableSize;
pub use transform::{compose, fit_fill_scale};
