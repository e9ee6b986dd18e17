//! Raised-palm gesture with debounce
//!
//! "Palm open" means every fingertip is above the wrist in image space.
//! This also matches a raised fist held fingers-up; no curl detection.

use crate::pose::{HandFrame, FINGERTIPS, WRIST};

/// Evaluate one hand. None when the hand frame is incomplete.
pub fn is_palm_open(hand: &HandFrame<'_>) -> Option<bool> {
    if !hand.is_complete() {
        return None;
    }
    let wrist = hand.get(WRIST)?;
    let mut open = true;
    for tip in FINGERTIPS {
        open &= hand.get(tip)?.y < wrist.y;
    }
    Some(open)
}

/// Debounces the raised-palm gesture into set-advance triggers
#[derive(Clone, Debug)]
pub struct GestureDebouncer {
    cooldown_ms: f64,
    /// Last evaluated hand was open
    palm_open: bool,
    last_gesture_ms: Option<f64>,
}

impl GestureDebouncer {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            cooldown_ms,
            palm_open: false,
            last_gesture_ms: None,
        }
    }

    pub fn is_cooling_down(&self, now_ms: f64) -> bool {
        match self.last_gesture_ms {
            Some(last) => now_ms - last < self.cooldown_ms,
            None => false,
        }
    }

    /// Evaluate all hands of one frame in arrival order.
    ///
    /// Returns true when a set-advance fired. At most one per call.
    pub fn update(&mut self, hands: &[HandFrame<'_>], now_ms: f64) -> bool {
        if self.is_cooling_down(now_ms) {
            return false;
        }

        let mut fired = false;
        for hand in hands {
            let open = match is_palm_open(hand) {
                Some(open) => open,
                None => continue,
            };

            if open && !self.palm_open {
                self.palm_open = true;
                self.last_gesture_ms = Some(now_ms);
                fired = true;
            } else if !open {
                self.palm_open = false;
            }
        }
        fired
    }

    pub fn is_palm_open(&self) -> bool {
        self.palm_open
    }

    pub fn last_gesture_ms(&self) -> Option<f64> {
        self.last_gesture_ms
    }

    pub fn reset(&mut self) {
        self.palm_open = false;
        self.last_gesture_ms = None;
    }
}
