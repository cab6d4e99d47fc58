//! Input abstraction: keyboard and pointer trackers, the action keymap, and
//! the per-actor key-state record consumed by locomotion.

pub mod action_map;
pub mod key_state;
pub mod keyboard;
pub mod pointer;

pub use action_map::{Action, Conflict, InputMap, keycode_name, string_to_keycode};
pub use key_state::KeyState;
pub use keyboard::{KeyboardState, RawKeyEvent};
pub use pointer::{ButtonMask, PointerState, client_to_window};
