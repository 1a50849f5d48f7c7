//! Input handling: pointer-event normalization and gesture recognition
//! that converts raw platform events into camera gestures.

/// Platform-agnostic pointer events.
pub mod event;
/// Per-pointer-slot gesture recognition.
pub mod gesture;
/// Pointer-event normalizer and pressed-button bookkeeping.
pub mod mouse;

pub use event::{PointerButton, PointerEvent, PointerKind};
pub use gesture::{
    GestureAdapter, GestureEvent, GestureSink, PointerRole, MAX_POINTERS,
};
pub use mouse::{MouseAdapter, SCROLL_UNITS_PER_NOTCH};
