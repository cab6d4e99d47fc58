//! Named animation states and the cross-fade/in-progress bookkeeping that
//! gates locomotion.
//!
//! Clip playback itself belongs to the renderer. This controller only tracks
//! which clip is active, how far a cross-fade has progressed, and whether a
//! one-shot action is still playing out.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::ClipInfo;

/// Clip length used when the model does not describe a state.
const DEFAULT_CLIP_DURATION: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationState {
    Idle,
    Walking,
    Running,
    Dance,
    Death,
    Sitting,
    Standing,
    Jump,
    Yes,
    No,
    Wave,
    Punch,
    ThumbsUp,
}

impl AnimationState {
    pub const ALL: [AnimationState; 13] = [
        AnimationState::Idle,
        AnimationState::Walking,
        AnimationState::Running,
        AnimationState::Dance,
        AnimationState::Death,
        AnimationState::Sitting,
        AnimationState::Standing,
        AnimationState::Jump,
        AnimationState::Yes,
        AnimationState::No,
        AnimationState::Wave,
        AnimationState::Punch,
        AnimationState::ThumbsUp,
    ];

    /// Clip name as it appears in the model description.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationState::Idle => "Idle",
            AnimationState::Walking => "Walking",
            AnimationState::Running => "Running",
            AnimationState::Dance => "Dance",
            AnimationState::Death => "Death",
            AnimationState::Sitting => "Sitting",
            AnimationState::Standing => "Standing",
            AnimationState::Jump => "Jump",
            AnimationState::Yes => "Yes",
            AnimationState::No => "No",
            AnimationState::Wave => "Wave",
            AnimationState::Punch => "Punch",
            AnimationState::ThumbsUp => "ThumbsUp",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.as_str() == name)
    }

    /// Emotes are the six gestures triggered by their own keys.
    #[must_use]
    pub fn is_emote(self) -> bool {
        matches!(
            self,
            AnimationState::Jump
                | AnimationState::Yes
                | AnimationState::No
                | AnimationState::Wave
                | AnimationState::Punch
                | AnimationState::ThumbsUp
        )
    }

    /// Looping clips repeat; every other clip plays once and holds its last pose.
    #[must_use]
    pub fn is_looping(self) -> bool {
        matches!(
            self,
            AnimationState::Idle
                | AnimationState::Walking
                | AnimationState::Running
                | AnimationState::Dance
        )
    }

    /// Whether a later request may replace this state before it finishes.
    #[must_use]
    pub fn is_interruptible(self) -> bool {
        matches!(
            self,
            AnimationState::Idle | AnimationState::Walking | AnimationState::Running
        )
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone)]
pub struct AnimationController {
    durations: [f32; 13],
    active: AnimationState,
    previous: Option<AnimationState>,
    clip_time: f32,
    fade_duration: f32,
    fade_elapsed: f32,
    action_in_progress: bool,
}

impl AnimationController {
    /// Build from the clips a model provides. Unknown clip names are skipped;
    /// states the model lacks fall back to a one-second clip.
    #[must_use]
    pub fn new(clips: &[ClipInfo]) -> Self {
        let mut durations = [DEFAULT_CLIP_DURATION; 13];
        for clip in clips {
            match AnimationState::from_name(&clip.name) {
                Some(state) if clip.duration.is_finite() && clip.duration > 0.0 => {
                    durations[state.index()] = clip.duration;
                }
                Some(state) => {
                    warn!("Clip '{}' has invalid duration {}", state.as_str(), clip.duration);
                }
                None => debug!("Ignoring unknown clip '{}'", clip.name),
            }
        }
        Self {
            durations,
            active: AnimationState::Idle,
            previous: None,
            clip_time: 0.0,
            fade_duration: 0.0,
            fade_elapsed: 0.0,
            action_in_progress: false,
        }
    }

    // ── Queries ─────────────────────────────────────────────────────

    #[must_use]
    pub fn active(&self) -> AnimationState {
        self.active
    }

    /// The state being faded out, while a cross-fade is running.
    #[must_use]
    pub fn fading_from(&self) -> Option<AnimationState> {
        self.previous
    }

    #[must_use]
    pub fn action_in_progress(&self) -> bool {
        self.action_in_progress
    }

    /// Seconds into the active clip. One-shot clips hold at their duration.
    #[must_use]
    pub fn clip_time(&self) -> f32 {
        self.clip_time
    }

    #[must_use]
    pub fn duration(&self, state: AnimationState) -> f32 {
        self.durations[state.index()]
    }

    /// Weight of the active clip, rising from 0 to 1 over the cross-fade.
    #[must_use]
    pub fn active_weight(&self) -> f32 {
        if self.fade_duration <= 0.0 {
            1.0
        } else {
            (self.fade_elapsed / self.fade_duration).min(1.0)
        }
    }

    // ── Transitions ─────────────────────────────────────────────────

    /// Cross-fade to `state` over `duration` seconds.
    ///
    /// Ignored when `state` is already active or a one-shot action is still
    /// playing. Returns whether the switch happened.
    pub fn fade_to_action(&mut self, state: AnimationState, duration: f32) -> bool {
        if state == self.active || self.action_in_progress {
            return false;
        }
        debug!("Animation {} -> {} ({duration}s)", self.active.as_str(), state.as_str());
        self.previous = Some(self.active);
        self.active = state;
        self.clip_time = 0.0;
        self.fade_duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        self.fade_elapsed = 0.0;
        self.action_in_progress = !state.is_interruptible();
        true
    }

    /// Advance clip and fade time by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.fade_elapsed += dt;
        if self.fade_elapsed >= self.fade_duration {
            self.previous = None;
        }

        let duration = self.duration(self.active);
        if self.active.is_looping() {
            self.clip_time = (self.clip_time + dt) % duration;
        } else {
            self.clip_time = (self.clip_time + dt).min(duration);
            if self.action_in_progress && self.clip_time >= duration {
                self.action_in_progress = false;
            }
        }
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(&[])
    }
}
