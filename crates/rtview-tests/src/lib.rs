//! Integration test crate for rtview.
//!
//! Holds cross-crate tests that exercise the view contract without a
//! GPU: the transform algebra, the producer/renderer handoff, and the
//! CPU fallback path.

#[cfg(test)]
mod fallback;

#[cfg(test)]
mod state;

#[cfg(test)]
mod transform;
