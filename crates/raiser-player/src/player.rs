//! Mutable per-frame state of the walker.

use glam::Vec3;
use raiser_config::PlayerConfig;
use raiser_input::KeyState;

use crate::model::PlayerModel;

#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Feet position in world space.
    pub position: Vec3,
    /// Heading in degrees. Accumulates without wrapping.
    pub direction: f32,
    /// Heading the model faces at rest, in degrees.
    pub initial_direction: f32,
    pub radius: f32,
    /// Eye height above the feet, in world units.
    pub eye_height: f32,
    pub scale: Vec3,
    pub walking_speed: f32,
    pub turning_speed: f32,
    pub running_factor: f32,
    pub key_state: KeyState,
}

impl PlayerState {
    /// Derive body dimensions from the model's bounding box and the configured scale.
    #[must_use]
    pub fn new(config: &PlayerConfig, model: &PlayerModel) -> Self {
        Self {
            position: Vec3::ZERO,
            direction: 0.0,
            initial_direction: config.initial_direction,
            radius: 0.5 * model.size.x * config.scale.x,
            eye_height: config.eye_height * model.size.y * config.scale.y,
            scale: config.scale,
            walking_speed: config.walking_speed,
            turning_speed: config.turning_speed,
            running_factor: config.running_factor,
            key_state: KeyState::default(),
        }
    }

    /// Place the walker at a maze cell centre facing `direction` degrees.
    pub fn place(&mut self, position: Vec3, direction: f32) {
        self.position = position;
        self.direction = direction;
    }

    /// Where the player-following cameras look.
    #[must_use]
    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::new(0.0, self.eye_height, 0.0)
    }

    /// Model yaw in radians, relative to the model's natural forward axis.
    #[must_use]
    pub fn render_rotation(&self) -> f32 {
        (self.direction - self.initial_direction).to_radians()
    }
}
