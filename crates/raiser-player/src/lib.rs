//! The maze walker: model metadata, animation state, and per-frame locomotion.

pub mod animation;
pub mod error;
pub mod locomotion;
pub mod model;
pub mod player;

pub use animation::{AnimationController, AnimationState};
pub use error::PlayerError;
pub use locomotion::{
    DEATH_RECOVERY_FADE, EMOTE_PRIORITY, MOVE_PRIORITY, SHORT_FADE, TURN_PRIORITY, Transition,
    locomotion_step,
};
pub use model::{ClipInfo, PlayerModel};
pub use player::PlayerState;
