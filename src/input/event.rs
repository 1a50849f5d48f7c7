//! Platform-agnostic pointer events.
//!
//! These are produced by a [`MouseAdapter`](super::MouseAdapter) from raw
//! platform input and consumed by a
//! [`GestureAdapter`](super::GestureAdapter).

use glam::IVec2;

/// Physical pointer button identifier.
///
/// The discriminant doubles as the button's bit position in the
/// pressed-button mask: bit `i` of [`PointerEvent::buttons`] is set while
/// the button with index `i` is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) button.
    Left,
    /// Secondary (right) button.
    Right,
    /// Middle button (wheel click).
    Middle,
    /// First extra button (back).
    Back,
    /// Second extra button (forward).
    Forward,
}

impl PointerButton {
    /// Number of distinct buttons tracked by the normalizer.
    pub const COUNT: usize = 5;

    /// Bit position of this button in the pressed-button mask.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Middle => 2,
            Self::Back => 3,
            Self::Forward => 4,
        }
    }

    /// Mask with only this button's bit set.
    #[must_use]
    pub fn bit(self) -> u32 {
        1 << self.index()
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back => Self::Back,
            winit::event::MouseButton::Forward => Self::Forward,
            _ => Self::Left,
        }
    }
}

/// What a [`PointerEvent`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// A button transitioned to pressed.
    ButtonDown,
    /// A button transitioned to released.
    ButtonUp,
    /// The pointer moved.
    Move,
    /// The scroll wheel turned.
    Scroll,
}

/// Uniform pointer event, one per platform event.
///
/// Button events are stamped with the pressed-button mask *including* the
/// affected button's bit: a release carries the mask as it was while the
/// button was still held, so the gesture recognizer can resolve which slot
/// retires. Move events carry the current mask unchanged; scroll events
/// carry a zero mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Event kind.
    pub kind: PointerKind,
    /// Pressed-button bitmask (bit `i` = button with index `i` held).
    pub buttons: u32,
    /// Pointer position in physical pixels.
    pub position: IVec2,
    /// Normalized scroll distance (wheel notches); zero for non-scroll
    /// events.
    pub scroll_delta: f32,
}
