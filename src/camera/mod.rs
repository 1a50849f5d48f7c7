//! Camera system for interactive 3D viewing.
//!
//! Provides the core perspective camera, viewport math, and the
//! gesture-driven orbit controller.

/// Gesture-driven orbit/pan/dolly controller around a movable pivot.
pub mod controller;
/// Core camera struct and viewport math.
pub mod core;

pub use controller::OrbitController;
pub use core::{Camera, Viewport};
