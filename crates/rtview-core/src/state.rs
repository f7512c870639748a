//! Shared state between the frame producer and the active renderer.
//!
//! Frames and settings arrive on producer threads while draws happen on
//! the render thread. Both cells are single atomic pointer swaps with
//! latest-value-wins semantics: a frame set before the previous one was
//! drawn replaces it, never queues behind it.

use std::sync::Arc;

use arc_swap::{ArcSwap, ArcSwapOption};

use crate::frame::{PlanarYuvFrame, SharedFrame};
use crate::settings::DisplaySettings;

/// The handoff cell shared by the view facade and its renderer.
pub struct ViewState {
    frame: ArcSwapOption<PlanarYuvFrame>,
    settings: ArcSwap<DisplaySettings>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            frame: ArcSwapOption::empty(),
            settings: ArcSwap::from_pointee(DisplaySettings::default()),
        }
    }

    /// Replace the current frame. Safe from any thread.
    pub fn set_frame(&self, frame: PlanarYuvFrame) {
        self.frame.store(Some(Arc::new(frame)));
    }

    /// Drop the current frame; subsequent draws become no-ops.
    pub fn clear_frame(&self) {
        self.frame.store(None);
    }

    /// Snapshot the latest frame for one render pass.
    pub fn frame(&self) -> Option<SharedFrame> {
        self.frame.load_full()
    }

    /// Replace the display settings. Safe from any thread.
    pub fn set_settings(&self, settings: DisplaySettings) {
        self.settings.store(Arc::new(settings));
    }

    /// Snapshot the latest display settings.
    pub fn settings(&self) -> DisplaySettings {
        **self.settings.load()
    }
}
