//! Scene fog parameters.

use raiser_config::FogConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FogState {
    pub enabled: bool,
    /// `0xRRGGBB`.
    pub color: u32,
    pub near: f32,
    pub far: f32,
}

impl FogState {
    /// Colour as `[r, g, b]` in `[0, 1]`.
    #[must_use]
    pub fn rgb(&self) -> [f32; 3] {
        let channel = |shift: u32| ((self.color >> shift) & 0xff) as f32 / 255.0;
        [channel(16), channel(8), channel(0)]
    }
}

impl From<&FogConfig> for FogState {
    fn from(config: &FogConfig) -> Self {
        Self {
            enabled: config.enabled,
            color: config.color,
            near: config.near,
            far: config.far,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let fog = FogState::from(&FogConfig::default());
        assert!(!fog.enabled);
        assert_eq!(fog.color, 0xe0e0e0);
    }

    #[test]
    fn test_rgb() {
        let fog = FogState {
            enabled: true,
            color: 0xff8000,
            near: 0.1,
            far: 14.0,
        };
        let [r, g, b] = fog.rgb();
        assert_eq!(r, 1.0);
        assert!((g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(b, 0.0);
    }
}
