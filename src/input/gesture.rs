//! Per-pointer-slot gesture recognition.
//!
//! `GestureAdapter` classifies sequences of [`PointerEvent`]s into
//! [`GestureEvent`]s: incremental `Drag`s tagged with a logical
//! [`PointerRole`], and pass-through `Scroll`s. Gestures are delivered to
//! a single registered sink.

use glam::IVec2;

use super::event::{PointerEvent, PointerKind};

/// Maximum number of concurrently tracked pointer slots.
pub const MAX_POINTERS: usize = 5;

/// Logical meaning of a pointer, derived from which buttons are held.
///
/// A closed enumeration: masks outside the mapping below have no role and
/// produce no drag gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRole {
    /// Primary button held (mask `0b001`).
    Primary,
    /// Secondary button held (mask `0b010`).
    Secondary,
    /// Tertiary button held (mask `0b100`).
    Tertiary,
    /// Primary and secondary held together (mask `0b011`).
    PrimaryDouble,
}

impl PointerRole {
    /// Resolve the role for a pressed-button mask, if any.
    ///
    /// Recomputed on every event; only the low three bits participate.
    #[must_use]
    pub fn from_mask(mask: u32) -> Option<Self> {
        match mask & 0b111 {
            0b001 => Some(Self::Primary),
            0b010 => Some(Self::Secondary),
            0b100 => Some(Self::Tertiary),
            0b011 => Some(Self::PrimaryDouble),
            _ => None,
        }
    }
}

/// A recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// An incremental drag step. `start` is the previous drag's `end`
    /// (or the press position for the first step of a gesture).
    Drag {
        /// Reference position in physical pixels.
        start: IVec2,
        /// New pointer position in physical pixels.
        end: IVec2,
        /// Logical pointer role at the moment of the move.
        pointer: PointerRole,
    },
    /// A scroll step, forwarded regardless of slot state.
    Scroll {
        /// Normalized scroll distance (wheel notches).
        distance: f32,
    },
}

/// Callback receiving recognized gestures.
pub type GestureSink = Box<dyn FnMut(GestureEvent) + Send>;

/// Tracking state for one pointer slot. Reset on button-up, never
/// destroyed.
#[derive(Debug, Clone, Copy, Default)]
struct PointerSlot {
    active: bool,
    start_position: IVec2,
    last_position: IVec2,
}

/// State machine turning pointer events into gestures.
///
/// One instance per input source. Up to [`MAX_POINTERS`] slots are
/// tracked independently; the slot for an event is the bit position of
/// the lowest set bit of its button mask. Out-of-range slots are dropped
/// silently.
#[derive(Default)]
pub struct GestureAdapter {
    slots: [PointerSlot; MAX_POINTERS],
    sink: Option<GestureSink>,
}

impl GestureAdapter {
    /// Create an adapter with all slots idle and no sink attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the gesture sink.
    ///
    /// Only one sink may be attached; a second attempt returns `false`
    /// and leaves the first sink in place.
    #[must_use]
    pub fn attach_sink<F>(&mut self, sink: F) -> bool
    where
        F: FnMut(GestureEvent) + Send + 'static,
    {
        if self.sink.is_some() {
            log::warn!("gesture sink already attached; ignoring new sink");
            return false;
        }
        self.sink = Some(Box::new(sink));
        true
    }

    /// Whether a sink is currently attached.
    #[must_use]
    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Where the gesture on `slot` began, if that slot is active.
    ///
    /// Unlike the per-drag `start`, this stays fixed at the button-down
    /// position for the whole gesture.
    #[must_use]
    pub fn gesture_origin(&self, slot: usize) -> Option<IVec2> {
        self.slots
            .get(slot)
            .and_then(|s| s.active.then_some(s.start_position))
    }

    /// Feed one pointer event through the recognizer.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        if event.kind == PointerKind::Scroll {
            self.emit(GestureEvent::Scroll {
                distance: event.scroll_delta,
            });
            return;
        }

        let Some(index) = slot_index(event.buttons) else {
            log::debug!(
                "pointer event with mask {:#b} has no valid slot; dropped",
                event.buttons
            );
            return;
        };

        match event.kind {
            PointerKind::ButtonDown => {
                let slot = &mut self.slots[index];
                slot.active = true;
                slot.start_position = event.position;
                slot.last_position = event.position;
            }
            PointerKind::ButtonUp => {
                let slot = &mut self.slots[index];
                slot.active = false;
                slot.last_position = event.position;
            }
            PointerKind::Move => {
                if !self.slots[index].active {
                    return;
                }
                let Some(pointer) = PointerRole::from_mask(event.buttons)
                else {
                    return;
                };
                let start = self.slots[index].last_position;
                self.slots[index].last_position = event.position;
                self.emit(GestureEvent::Drag {
                    start,
                    end: event.position,
                    pointer,
                });
            }
            PointerKind::Scroll => {}
        }
    }

    fn emit(&mut self, gesture: GestureEvent) {
        if let Some(sink) = self.sink.as_mut() {
            sink(gesture);
        }
    }
}

/// Slot index for a button mask: the bit position of the lowest set bit,
/// if it falls within [`MAX_POINTERS`].
fn slot_index(mask: u32) -> Option<usize> {
    if mask == 0 {
        return None;
    }
    let index = mask.trailing_zeros() as usize;
    (index < MAX_POINTERS).then_some(index)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::input::event::PointerButton;
    use crate::input::mouse::MouseAdapter;

    fn collecting_adapter() -> (GestureAdapter, Arc<Mutex<Vec<GestureEvent>>>)
    {
        let collected = Arc::new(Mutex::new(Vec::new()));
        let sink_ref = Arc::clone(&collected);
        let mut adapter = GestureAdapter::new();
        assert!(adapter.attach_sink(move |g| {
            if let Ok(mut events) = sink_ref.lock() {
                events.push(g);
            }
        }));
        (adapter, collected)
    }

    fn drain(collected: &Arc<Mutex<Vec<GestureEvent>>>) -> Vec<GestureEvent> {
        match collected.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    #[test]
    fn drag_chain_is_incremental() {
        let (mut gestures, collected) = collecting_adapter();
        let mut mouse = MouseAdapter::new();

        let positions =
            [IVec2::new(0, 0), IVec2::new(3, 1), IVec2::new(7, 4)];
        gestures.on_pointer_event(&mouse.button_event(
            PointerButton::Left,
            true,
            positions[0],
        ));
        for p in &positions[1..] {
            gestures.on_pointer_event(&mouse.move_event(*p));
        }
        gestures.on_pointer_event(&mouse.button_event(
            PointerButton::Left,
            false,
            positions[2],
        ));

        let events = drain(&collected);
        // One Drag per move while active.
        assert_eq!(events.len(), 2);
        let mut previous_end = positions[0];
        for event in events {
            let GestureEvent::Drag { start, end, pointer } = event else {
                unreachable!("expected drag gesture");
            };
            assert_eq!(start, previous_end);
            assert_eq!(pointer, PointerRole::Primary);
            previous_end = end;
        }
        assert_eq!(previous_end, positions[2]);
    }

    #[test]
    fn moves_without_active_slot_emit_nothing() {
        let (mut gestures, collected) = collecting_adapter();
        let mouse = MouseAdapter::new();
        gestures.on_pointer_event(&mouse.move_event(IVec2::new(4, 4)));
        assert!(drain(&collected).is_empty());
    }

    #[test]
    fn release_stops_drag_emission() {
        let (mut gestures, collected) = collecting_adapter();
        let mut mouse = MouseAdapter::new();
        gestures.on_pointer_event(&mouse.button_event(
            PointerButton::Right,
            true,
            IVec2::ZERO,
        ));
        gestures.on_pointer_event(&mouse.button_event(
            PointerButton::Right,
            false,
            IVec2::new(1, 1),
        ));
        gestures.on_pointer_event(&mouse.move_event(IVec2::new(5, 5)));
        assert!(drain(&collected).is_empty());
    }

    #[test]
    fn role_mapping_covers_all_valid_masks() {
        assert_eq!(PointerRole::from_mask(0b001), Some(PointerRole::Primary));
        assert_eq!(
            PointerRole::from_mask(0b010),
            Some(PointerRole::Secondary)
        );
        assert_eq!(PointerRole::from_mask(0b100), Some(PointerRole::Tertiary));
        assert_eq!(
            PointerRole::from_mask(0b011),
            Some(PointerRole::PrimaryDouble)
        );
        for mask in [0b000, 0b101, 0b110, 0b111] {
            assert_eq!(PointerRole::from_mask(mask), None, "mask {mask:#b}");
        }
        // High bits never influence the role.
        assert_eq!(
            PointerRole::from_mask(0b11010),
            Some(PointerRole::Secondary)
        );
    }

    #[test]
    fn out_of_range_slots_are_dropped() {
        let (mut gestures, collected) = collecting_adapter();
        // Lowest set bit at position 5 and above has no slot.
        gestures.on_pointer_event(&PointerEvent {
            kind: PointerKind::ButtonDown,
            buttons: 1 << MAX_POINTERS,
            position: IVec2::ZERO,
            scroll_delta: 0.0,
        });
        gestures.on_pointer_event(&PointerEvent {
            kind: PointerKind::Move,
            buttons: 1 << MAX_POINTERS,
            position: IVec2::new(9, 9),
            scroll_delta: 0.0,
        });
        assert!(drain(&collected).is_empty());
    }

    #[test]
    fn scroll_is_forwarded_immediately() {
        let (mut gestures, collected) = collecting_adapter();
        let mouse = MouseAdapter::new();
        gestures.on_pointer_event(&mouse.scroll_event(-120.0));
        let events = drain(&collected);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0], GestureEvent::Scroll { distance: -1.0 });
    }

    #[test]
    fn second_sink_attach_fails_and_keeps_first() {
        let (mut gestures, collected) = collecting_adapter();
        assert!(!gestures.attach_sink(|_| {}));
        assert!(gestures.has_sink());

        // First sink still receives gestures.
        let mouse = MouseAdapter::new();
        gestures.on_pointer_event(&mouse.scroll_event(120.0));
        assert_eq!(drain(&collected).len(), 1);
    }
}
