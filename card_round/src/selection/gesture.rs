//! Manual selection gestures.

use super::events::SelectionReason;
use std::{collections::HashMap, time::Duration};

/// Default gap within which a second tap is a double tap (400 ms)
pub const DEFAULT_DOUBLE_TAP: Duration = Duration::from_millis(400);

/// Default height a card must be dragged past to be sent
pub const DEFAULT_DRAG_SELECT_HEIGHT: f32 = 150.0;

/// Recognizes double taps and drag releases per slot.
///
/// Times are offsets from any fixed origin chosen by the caller (for
/// example the start of the round).
#[derive(Clone, Debug)]
pub struct GestureTracker {
    double_tap: Duration,
    drag_height: f32,
    last_tap: HashMap<usize, Duration>,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_TAP, DEFAULT_DRAG_SELECT_HEIGHT)
    }
}

impl GestureTracker {
    pub fn new(double_tap: Duration, drag_height: f32) -> Self {
        Self {
            double_tap,
            drag_height,
            last_tap: HashMap::new(),
        }
    }

    /// Pointer went down on `position` at `at`. Returns a reason when this
    /// completes a double tap.
    pub fn tap(&mut self, position: usize, at: Duration) -> Option<SelectionReason> {
        if let Some(previous) = self.last_tap.get(&position) {
            if at.saturating_sub(*previous) < self.double_tap {
                self.last_tap.remove(&position);
                return Some(SelectionReason::DoubleTap);
            }
        }
        self.last_tap.insert(position, at);
        None
    }

    /// A dragged card was released at height `y`.
    pub fn drag_release(&self, y: f32) -> Option<SelectionReason> {
        (y > self.drag_height).then_some(SelectionReason::DragDrop)
    }

    /// Forget pending taps, e.g. when a new hand is dealt.
    pub fn clear(&mut self) {
        self.last_tap.clear();
    }
}
