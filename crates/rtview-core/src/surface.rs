//! Destination surface sizing.

/// Source of the destination's device-pixel size.
///
/// The size may change between frames (window resize, device rotation),
/// so renderers re-query it on every draw instead of caching it. Resize
/// is implicit: there is no push notification, only this pull.
pub trait DrawableSize: Send + Sync {
    /// Current drawable size in device pixels. `(0, 0)` means no drawable
    /// is available this cycle.
    fn drawable_size(&self) -> (u32, u32);
}

/// Fixed size, mainly for tests and offscreen targets.
impl DrawableSize for (u32, u32) {
    fn drawable_size(&self) -> (u32, u32) {
        *self
    }
}
