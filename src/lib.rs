// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]

//! Input-to-camera control core for interactive 3D viewports.
//!
//! Orbitview turns raw pointer events into semantic gestures, gestures
//! into orbit/pan/dolly camera transforms around a movable pivot, and
//! screen points into object-picking rays, and safely hands scene
//! mutations across threads at frame boundaries.
//!
//! # Key entry points
//!
//! - [`input::MouseAdapter`] - normalizes platform input into
//!   [`input::PointerEvent`]s
//! - [`input::GestureAdapter`] - classifies pointer events into
//!   [`input::GestureEvent`]s
//! - [`camera::OrbitController`] - applies gestures to a
//!   [`camera::Camera`]
//! - [`sync::FrameTaskQueue`] - cross-thread one-shot task hand-off
//!   drained at frame boundaries
//! - [`picking`] - screen-point pick rays and selection state
//!
//! # Architecture
//!
//! Two logical threads: the input thread runs the normalizer and gesture
//! recognizer; the render thread owns the engine, camera, and scene.
//! Gestures that arrive off the render thread are wrapped as
//! [`sync::FrameTaskQueue`] tasks and applied at the next frame
//! boundary. No operation in this crate blocks or suspends; all
//! processing is synchronous, bounded, and per-event.

/// Camera, viewport, and the orbit controller.
pub mod camera;
/// Crate error types.
pub mod error;
/// Pointer normalization and gesture recognition.
pub mod input;
/// Control options with TOML preset support.
pub mod options;
/// Pick rays and selection state.
pub mod picking;
/// Frame-boundary task hand-off between threads.
pub mod sync;

pub use camera::{Camera, OrbitController, Viewport};
pub use error::OrbitViewError;
pub use input::{GestureAdapter, GestureEvent, MouseAdapter, PointerRole};
pub use options::ControlOptions;
pub use sync::FrameTaskQueue;
