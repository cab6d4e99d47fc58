//! Per-actor held-key record read by locomotion.

use crate::action_map::Action;

/// Held state of the locomotion and emote actions.
///
/// Each flag is last-writer-wins: the most recent press or release of an
/// action decides its value, independent of every other flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub run: bool,
    pub left: bool,
    pub right: bool,
    pub backward: bool,
    pub forward: bool,
    pub jump: bool,
    pub yes: bool,
    pub no: bool,
    pub wave: bool,
    pub punch: bool,
    pub thumbs_up: bool,
}

impl KeyState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release. Returns `false` for actions this record does
    /// not track (view selection and toggles).
    pub fn set(&mut self, action: Action, held: bool) -> bool {
        match self.slot_mut(action) {
            Some(slot) => {
                *slot = held;
                true
            }
            None => false,
        }
    }

    /// Whether `action` is held; untracked actions are never held.
    #[must_use]
    pub fn is_held(&self, action: Action) -> bool {
        match action {
            Action::Run => self.run,
            Action::Left => self.left,
            Action::Right => self.right,
            Action::Backward => self.backward,
            Action::Forward => self.forward,
            Action::Jump => self.jump,
            Action::Yes => self.yes,
            Action::No => self.no,
            Action::Wave => self.wave,
            Action::Punch => self.punch,
            Action::ThumbsUp => self.thumbs_up,
            _ => false,
        }
    }

    /// Release every key.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn slot_mut(&mut self, action: Action) -> Option<&mut bool> {
        Some(match action {
            Action::Run => &mut self.run,
            Action::Left => &mut self.left,
            Action::Right => &mut self.right,
            Action::Backward => &mut self.backward,
            Action::Forward => &mut self.forward,
            Action::Jump => &mut self.jump,
            Action::Yes => &mut self.yes,
            Action::No => &mut self.no,
            Action::Wave => &mut self.wave,
            Action::Punch => &mut self.punch,
            Action::ThumbsUp => &mut self.thumbs_up,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_writer_wins() {
        let mut keys = KeyState::new();
        keys.set(Action::Forward, true);
        keys.set(Action::Forward, true);
        keys.set(Action::Forward, false);
        assert!(!keys.forward);
    }

    #[test]
    fn test_flags_are_independent() {
        let mut keys = KeyState::new();
        keys.set(Action::Left, true);
        keys.set(Action::Right, true);
        keys.set(Action::Left, false);
        assert!(keys.right);
        assert!(keys.is_held(Action::Right));
        assert!(!keys.is_held(Action::Left));
    }

    #[test]
    fn test_untracked_actions_rejected() {
        let mut keys = KeyState::new();
        assert!(!keys.set(Action::MiniMap, true));
        assert!(!keys.is_held(Action::MiniMap));
        assert_eq!(keys, KeyState::default());
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut keys = KeyState::new();
        keys.set(Action::ThumbsUp, true);
        keys.set(Action::Run, true);
        keys.clear();
        assert_eq!(keys, KeyState::default());
    }
}
