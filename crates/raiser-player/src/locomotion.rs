//! One frame of walker movement.
//!
//! [`locomotion_step`] turns the held keys and elapsed time into a new heading
//! and position, gates the move through a [`CollisionProbe`], and reports the
//! animation the walker should fade to. The caller decides whether to run it
//! at all: it must be skipped while a one-shot action is playing and on the
//! frame the exit is found.

use glam::Vec3;
use raiser_input::Action;
use raiser_maze::CollisionProbe;

use crate::animation::AnimationState;
use crate::player::PlayerState;

/// Fade used for every transition except recovering from death.
pub const SHORT_FADE: f32 = 0.2;
/// Fade from `Death` back to `Idle`.
pub const DEATH_RECOVERY_FADE: f32 = 0.6;

/// Turn keys in priority order. The first held one wins.
pub const TURN_PRIORITY: [Action; 2] = [Action::Left, Action::Right];
/// Move keys in priority order. The first held one wins.
pub const MOVE_PRIORITY: [Action; 2] = [Action::Backward, Action::Forward];
/// Emote keys in priority order, consulted only when no move key is held.
pub const EMOTE_PRIORITY: [(Action, AnimationState); 6] = [
    (Action::Jump, AnimationState::Jump),
    (Action::Yes, AnimationState::Yes),
    (Action::No, AnimationState::No),
    (Action::Wave, AnimationState::Wave),
    (Action::Punch, AnimationState::Punch),
    (Action::ThumbsUp, AnimationState::ThumbsUp),
];

/// The animation a step asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub state: AnimationState,
    pub fade: f32,
}

impl Transition {
    #[must_use]
    pub fn new(state: AnimationState, fade: f32) -> Self {
        Self { state, fade }
    }
}

/// Advance `player` by `dt` seconds.
///
/// `active` is the animation currently playing; it only affects the fade
/// length of a return to `Idle`. A blocked move leaves the position
/// untouched and asks for `Death`.
pub fn locomotion_step(
    player: &mut PlayerState,
    active: AnimationState,
    probe: &impl CollisionProbe,
    dt: f32,
) -> Transition {
    let keys = player.key_state;
    let mut covered = player.walking_speed * dt;
    let mut turn = player.turning_speed * dt;
    if keys.run {
        covered *= player.running_factor;
        turn *= player.running_factor;
    }

    match TURN_PRIORITY.into_iter().find(|&action| keys.is_held(action)) {
        Some(Action::Left) => player.direction += turn,
        Some(_) => player.direction -= turn,
        None => {}
    }

    if let Some(action) = MOVE_PRIORITY.into_iter().find(|&action| keys.is_held(action)) {
        let sign = if action == Action::Forward { 1.0 } else { -1.0 };
        let heading = player.direction.to_radians();
        let candidate = player.position
            + Vec3::new(sign * covered * heading.sin(), 0.0, sign * covered * heading.cos());
        if probe.is_blocked(candidate, player.radius) {
            return Transition::new(AnimationState::Death, SHORT_FADE);
        }
        player.position = candidate;
        let state = if keys.run {
            AnimationState::Running
        } else {
            AnimationState::Walking
        };
        return Transition::new(state, SHORT_FADE);
    }

    if let Some((_, emote)) = EMOTE_PRIORITY
        .into_iter()
        .find(|&(action, _)| keys.is_held(action))
    {
        return Transition::new(emote, SHORT_FADE);
    }

    let fade = if active == AnimationState::Death {
        DEATH_RECOVERY_FADE
    } else {
        SHORT_FADE
    };
    Transition::new(AnimationState::Idle, fade)
}
