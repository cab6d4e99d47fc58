//! Player model metadata.
//!
//! The scene graph and meshes of a model are the renderer's business. The
//! walker only needs the clip names and lengths and the bounding-box size,
//! read from a JSON sidecar:
//!
//! ```json
//! { "animations": [{ "name": "Idle", "duration": 2.0 }], "size": [3.0, 9.0, 2.0] }
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::PlayerError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipInfo {
    pub name: String,
    /// Clip length in seconds.
    pub duration: f32,
}

impl ClipInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerModel {
    #[serde(default)]
    pub animations: Vec<ClipInfo>,
    /// Unscaled axis-aligned bounding-box size.
    pub size: Vec3,
}

impl PlayerModel {
    pub fn from_json(bytes: &[u8]) -> Result<Self, PlayerError> {
        let model: Self = serde_json::from_slice(bytes)?;
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), PlayerError> {
        if !self.size.is_finite() || self.size.min_element() <= 0.0 {
            return Err(PlayerError::InvalidModel(format!(
                "size must be positive, got {}",
                self.size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sidecar() {
        let json = br#"{ "animations": [{ "name": "Idle", "duration": 2.0 }], "size": [3.0, 9.0, 2.0] }"#;
        let model = PlayerModel::from_json(json).unwrap();
        assert_eq!(model.animations, vec![ClipInfo::new("Idle", 2.0)]);
        assert_eq!(model.size, Vec3::new(3.0, 9.0, 2.0));
    }

    #[test]
    fn test_animations_optional() {
        let model = PlayerModel::from_json(br#"{ "size": [1, 1, 1] }"#).unwrap();
        assert!(model.animations.is_empty());
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = PlayerModel::from_json(br#"{ "size": [1, 0, 1] }"#).unwrap_err();
        assert!(matches!(err, PlayerError::InvalidModel(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = PlayerModel::from_json(b"{ size: ").unwrap_err();
        assert!(matches!(err, PlayerError::Parse(_)));
    }
}
