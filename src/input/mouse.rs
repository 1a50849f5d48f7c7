//! Pointer-event normalizer.
//!
//! `MouseAdapter` converts platform button/move/wheel input into uniform
//! [`PointerEvent`]s, maintaining the pressed-button bitmask that stamps
//! every event and a small per-button press table used for click-vs-drag
//! disambiguation by consumers.

use glam::IVec2;

use super::event::{PointerButton, PointerEvent, PointerKind};

/// Raw platform scroll units per wheel notch; scroll deltas are divided
/// by this before leaving the normalizer.
pub const SCROLL_UNITS_PER_NOTCH: f32 = 120.0;

/// Per-button press bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
struct ButtonStatus {
    pressed: bool,
    pressed_location: IVec2,
}

/// Converts platform pointer input into [`PointerEvent`]s.
///
/// Owns the shared pressed-button mask and the per-button press table.
/// All processing is synchronous and per-event; the adapter is intended
/// to live on the thread that receives platform input.
#[derive(Debug, Default)]
pub struct MouseAdapter {
    pressed_mask: u32,
    buttons: [ButtonStatus; PointerButton::COUNT],
}

impl MouseAdapter {
    /// Create an adapter with no buttons pressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pressed-button bitmask.
    #[must_use]
    pub fn pressed_mask(&self) -> u32 {
        self.pressed_mask
    }

    /// Where `button` was pressed, if it is currently held.
    ///
    /// Consumers compare this against the release position to tell a
    /// click from a drag.
    #[must_use]
    pub fn press_origin(&self, button: PointerButton) -> Option<IVec2> {
        let status = self.buttons[button.index()];
        status.pressed.then_some(status.pressed_location)
    }

    /// Normalize a button press or release at `position`.
    ///
    /// Both transitions are stamped with the mask including the affected
    /// button's bit; the bit clears only after a release event has been
    /// built.
    pub fn button_event(
        &mut self,
        button: PointerButton,
        pressed: bool,
        position: IVec2,
    ) -> PointerEvent {
        let status = &mut self.buttons[button.index()];
        let kind = if pressed {
            status.pressed = true;
            status.pressed_location = position;
            self.pressed_mask |= button.bit();
            PointerKind::ButtonDown
        } else {
            status.pressed = false;
            PointerKind::ButtonUp
        };
        let event = PointerEvent {
            kind,
            buttons: self.pressed_mask | button.bit(),
            position,
            scroll_delta: 0.0,
        };
        if !pressed {
            self.pressed_mask &= !button.bit();
        }
        event
    }

    /// Normalize a pointer move to `position`.
    ///
    /// Moves carry the current mask unchanged.
    #[must_use]
    pub fn move_event(&self, position: IVec2) -> PointerEvent {
        PointerEvent {
            kind: PointerKind::Move,
            buttons: self.pressed_mask,
            position,
            scroll_delta: 0.0,
        }
    }

    /// Normalize a wheel event with `raw_delta` in platform scroll units.
    ///
    /// The delta is divided by [`SCROLL_UNITS_PER_NOTCH`]; the mask is
    /// zero for scroll events.
    #[must_use]
    pub fn scroll_event(&self, raw_delta: f32) -> PointerEvent {
        PointerEvent {
            kind: PointerKind::Scroll,
            buttons: 0,
            position: IVec2::ZERO,
            scroll_delta: raw_delta / SCROLL_UNITS_PER_NOTCH,
        }
    }
}
