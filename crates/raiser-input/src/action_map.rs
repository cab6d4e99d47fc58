//! Action mapping: each logical [`Action`] is bound to one physical key.
//!
//! Key names in configuration are `KeyCode` debug strings (`"ArrowUp"`,
//! `"KeyJ"`, `"Digit1"`). An unknown name leaves its action unbound and logs
//! a warning.

use raiser_config::KeyCodes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;
use winit::keyboard::KeyCode;

/// Logical actions bound to keys.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    FixedView,
    FirstPersonView,
    ThirdPersonView,
    TopView,
    ViewMode,
    UserInterface,
    MiniMap,
    Help,
    Statistics,
    Run,
    Left,
    Right,
    Backward,
    Forward,
    Jump,
    Yes,
    No,
    Wave,
    Punch,
    ThumbsUp,
}

impl Action {
    /// Every action, in help-table order.
    pub const ALL: [Action; 20] = [
        Action::FixedView,
        Action::FirstPersonView,
        Action::ThirdPersonView,
        Action::TopView,
        Action::ViewMode,
        Action::UserInterface,
        Action::MiniMap,
        Action::Help,
        Action::Statistics,
        Action::Run,
        Action::Left,
        Action::Right,
        Action::Backward,
        Action::Forward,
        Action::Jump,
        Action::Yes,
        Action::No,
        Action::Wave,
        Action::Punch,
        Action::ThumbsUp,
    ];

    /// Snake-case identifier, as used on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Action::FixedView => "fixed_view",
            Action::FirstPersonView => "first_person_view",
            Action::ThirdPersonView => "third_person_view",
            Action::TopView => "top_view",
            Action::ViewMode => "view_mode",
            Action::UserInterface => "user_interface",
            Action::MiniMap => "mini_map",
            Action::Help => "help",
            Action::Statistics => "statistics",
            Action::Run => "run",
            Action::Left => "left",
            Action::Right => "right",
            Action::Backward => "backward",
            Action::Forward => "forward",
            Action::Jump => "jump",
            Action::Yes => "yes",
            Action::No => "no",
            Action::Wave => "wave",
            Action::Punch => "punch",
            Action::ThumbsUp => "thumbs_up",
        }
    }

    /// Parse the identifier returned by [`as_str`](Self::as_str).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|action| action.as_str() == name)
    }

    /// Human-readable description for the help table.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Action::FixedView => "Set fixed view",
            Action::FirstPersonView => "Set first-person view",
            Action::ThirdPersonView => "Set third-person view",
            Action::TopView => "Set top view",
            Action::ViewMode => "Toggle single/multiple views",
            Action::UserInterface => "Toggle user interface",
            Action::MiniMap => "Toggle mini-map",
            Action::Help => "Toggle help",
            Action::Statistics => "Toggle statistics",
            Action::Run => "Run",
            Action::Left => "Turn left",
            Action::Right => "Turn right",
            Action::Backward => "Walk backward",
            Action::Forward => "Walk forward",
            Action::Jump => "Jump",
            Action::Yes => "Yes",
            Action::No => "No",
            Action::Wave => "Wave",
            Action::Punch => "Punch",
            Action::ThumbsUp => "Thumbs up",
        }
    }

    fn configured_name(self, codes: &KeyCodes) -> &str {
        match self {
            Action::FixedView => &codes.fixed_view,
            Action::FirstPersonView => &codes.first_person_view,
            Action::ThirdPersonView => &codes.third_person_view,
            Action::TopView => &codes.top_view,
            Action::ViewMode => &codes.view_mode,
            Action::UserInterface => &codes.user_interface,
            Action::MiniMap => &codes.mini_map,
            Action::Help => &codes.help,
            Action::Statistics => &codes.statistics,
            Action::Run => &codes.run,
            Action::Left => &codes.left,
            Action::Right => &codes.right,
            Action::Backward => &codes.backward,
            Action::Forward => &codes.forward,
            Action::Jump => &codes.jump,
            Action::Yes => &codes.yes,
            Action::No => &codes.no,
            Action::Wave => &codes.wave,
            Action::Punch => &codes.punch,
            Action::ThumbsUp => &codes.thumbs_up,
        }
    }
}

/// Parse a `KeyCode` debug string.
#[must_use]
pub fn string_to_keycode(s: &str) -> Option<KeyCode> {
    Some(match s {
        "KeyA" => KeyCode::KeyA,
        "KeyB" => KeyCode::KeyB,
        "KeyC" => KeyCode::KeyC,
        "KeyD" => KeyCode::KeyD,
        "KeyE" => KeyCode::KeyE,
        "KeyF" => KeyCode::KeyF,
        "KeyG" => KeyCode::KeyG,
        "KeyH" => KeyCode::KeyH,
        "KeyI" => KeyCode::KeyI,
        "KeyJ" => KeyCode::KeyJ,
        "KeyK" => KeyCode::KeyK,
        "KeyL" => KeyCode::KeyL,
        "KeyM" => KeyCode::KeyM,
        "KeyN" => KeyCode::KeyN,
        "KeyO" => KeyCode::KeyO,
        "KeyP" => KeyCode::KeyP,
        "KeyQ" => KeyCode::KeyQ,
        "KeyR" => KeyCode::KeyR,
        "KeyS" => KeyCode::KeyS,
        "KeyT" => KeyCode::KeyT,
        "KeyU" => KeyCode::KeyU,
        "KeyV" => KeyCode::KeyV,
        "KeyW" => KeyCode::KeyW,
        "KeyX" => KeyCode::KeyX,
        "KeyY" => KeyCode::KeyY,
        "KeyZ" => KeyCode::KeyZ,
        "Digit0" => KeyCode::Digit0,
        "Digit1" => KeyCode::Digit1,
        "Digit2" => KeyCode::Digit2,
        "Digit3" => KeyCode::Digit3,
        "Digit4" => KeyCode::Digit4,
        "Digit5" => KeyCode::Digit5,
        "Digit6" => KeyCode::Digit6,
        "Digit7" => KeyCode::Digit7,
        "Digit8" => KeyCode::Digit8,
        "Digit9" => KeyCode::Digit9,
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "Tab" => KeyCode::Tab,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ControlRight" => KeyCode::ControlRight,
        "AltLeft" => KeyCode::AltLeft,
        "AltRight" => KeyCode::AltRight,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        _ => return None,
    })
}

/// The name [`string_to_keycode`] accepts for `code`.
#[must_use]
pub fn keycode_name(code: KeyCode) -> String {
    format!("{code:?}")
}

/// The same key bound to more than one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub key: KeyCode,
    pub actions: Vec<Action>,
}

/// Maps each [`Action`] to its key.
#[derive(Debug, Clone, Default)]
pub struct InputMap {
    bindings: HashMap<Action, KeyCode>,
}

impl InputMap {
    /// Build the map from configured key names.
    #[must_use]
    pub fn from_config(codes: &KeyCodes) -> Self {
        let mut bindings = HashMap::new();
        for action in Action::ALL {
            let name = action.configured_name(codes);
            match string_to_keycode(name) {
                Some(code) => {
                    bindings.insert(action, code);
                }
                None => warn!("Unknown key '{name}' for action {}; left unbound", action.as_str()),
            }
        }
        Self { bindings }
    }

    /// Bind `action` to `key`, replacing any previous binding.
    pub fn bind(&mut self, action: Action, key: KeyCode) {
        self.bindings.insert(action, key);
    }

    #[must_use]
    pub fn key_for(&self, action: Action) -> Option<KeyCode> {
        self.bindings.get(&action).copied()
    }

    /// The action bound to `key`. With conflicting bindings the first action
    /// in [`Action::ALL`] order wins.
    #[must_use]
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|action| self.bindings.get(action) == Some(&key))
    }

    /// Keys bound to more than one action.
    #[must_use]
    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        let mut seen: HashMap<KeyCode, Vec<Action>> = HashMap::new();
        for action in Action::ALL {
            if let Some(key) = self.bindings.get(&action) {
                seen.entry(*key).or_default().push(action);
            }
        }
        seen.into_iter()
            .filter(|(_, actions)| actions.len() > 1)
            .map(|(key, actions)| Conflict { key, actions })
            .collect()
    }
}
