//! Held-key tracking.
//!
//! [`KeyboardState`] keeps the set of held physical keys and reports whether
//! each event changed it, so callers can tell a press edge from auto-repeat.

use std::collections::HashSet;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Minimal description of a key event for processing.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    /// The physical key involved.
    pub key: KeyCode,
    /// Whether the key was pressed or released.
    pub state: ElementState,
    /// Whether this is an auto-repeat event.
    pub repeat: bool,
}

impl RawKeyEvent {
    /// A non-repeat press of `key`.
    #[must_use]
    pub fn pressed(key: KeyCode) -> Self {
        Self {
            key,
            state: ElementState::Pressed,
            repeat: false,
        }
    }

    /// A release of `key`.
    #[must_use]
    pub fn released(key: KeyCode) -> Self {
        Self {
            key,
            state: ElementState::Released,
            repeat: false,
        }
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.state == ElementState::Pressed
    }
}

/// Held physical keys.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Creates a new `KeyboardState` with no keys pressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a key event. Repeat events are ignored.
    ///
    /// Returns `true` when the event changed the held state of its key.
    pub fn process_raw(&mut self, event: RawKeyEvent) -> bool {
        if event.repeat {
            return false;
        }
        match event.state {
            ElementState::Pressed => self.pressed.insert(event.key),
            ElementState::Released => self.pressed.remove(&event.key),
        }
    }

    /// Returns `true` while the key is held down.
    #[must_use]
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_no_keys_pressed() {
        let kb = KeyboardState::new();
        for key in [KeyCode::ArrowUp, KeyCode::KeyR, KeyCode::Digit1] {
            assert!(!kb.is_pressed(key));
        }
    }

    #[test]
    fn test_press_then_release() {
        let mut kb = KeyboardState::new();
        assert!(kb.process_raw(RawKeyEvent::pressed(KeyCode::ArrowUp)));
        assert!(kb.is_pressed(KeyCode::ArrowUp));

        assert!(kb.process_raw(RawKeyEvent::released(KeyCode::ArrowUp)));
        assert!(!kb.is_pressed(KeyCode::ArrowUp));
    }

    #[test]
    fn test_second_press_of_held_key_is_not_a_change() {
        let mut kb = KeyboardState::new();
        assert!(kb.process_raw(RawKeyEvent::pressed(KeyCode::KeyJ)));
        assert!(!kb.process_raw(RawKeyEvent::pressed(KeyCode::KeyJ)));
        assert!(kb.is_pressed(KeyCode::KeyJ));
    }

    #[test]
    fn test_repeat_events_ignored() {
        let mut kb = KeyboardState::new();
        let repeat = RawKeyEvent {
            repeat: true,
            ..RawKeyEvent::pressed(KeyCode::KeyR)
        };
        assert!(!kb.process_raw(repeat));
        assert!(!kb.is_pressed(KeyCode::KeyR));

        kb.process_raw(RawKeyEvent::pressed(KeyCode::KeyR));
        let repeat_release = RawKeyEvent {
            repeat: true,
            ..RawKeyEvent::released(KeyCode::KeyR)
        };
        assert!(!kb.process_raw(repeat_release));
        assert!(kb.is_pressed(KeyCode::KeyR));
    }

    #[test]
    fn test_release_of_unheld_key_is_not_a_change() {
        let mut kb = KeyboardState::new();
        assert!(!kb.process_raw(RawKeyEvent::released(KeyCode::KeyV)));
    }
}
