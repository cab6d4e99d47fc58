//! Configuration structs with designer defaults and RON persistence.

use std::path::{Path, PathBuf};

use glam::Vec3;
use raiser_math::{Orientation, Viewport};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::merge::merge_with_defaults;

const CONFIG_FILE: &str = "config.ron";

/// Top-level game configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Maze resource and cell scale.
    pub maze: MazeConfig,
    /// Player model resource and locomotion parameters.
    pub player: PlayerConfig,
    /// Scene fog.
    pub fog: FogConfig,
    /// Per-view camera parameters.
    pub cameras: CamerasConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

/// Maze configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MazeConfig {
    /// Path to the maze description (JSON).
    pub url: PathBuf,
    /// Attribution shown in the help table.
    pub credits: String,
    /// World-space size of one grid cell.
    pub scale: Vec3,
}

/// Player configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Path to the player model description (JSON).
    pub url: PathBuf,
    /// Attribution shown in the help table.
    pub credits: String,
    /// Eye height as a fraction of the model's height.
    pub eye_height: f32,
    /// Model scale.
    pub scale: Vec3,
    /// Walking speed in world units per second.
    pub walking_speed: f32,
    /// Heading the model faces at rest, in degrees.
    pub initial_direction: f32,
    /// Turning speed in degrees per second.
    pub turning_speed: f32,
    /// Multiplier applied to both speeds while running.
    pub running_factor: f32,
    /// Physical key bound to each action.
    pub key_codes: KeyCodes,
}

/// Key names (`KeyCode` debug strings, e.g. `"ArrowUp"`) bound to each action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyCodes {
    pub fixed_view: String,
    pub first_person_view: String,
    pub third_person_view: String,
    pub top_view: String,
    pub view_mode: String,
    pub user_interface: String,
    pub mini_map: String,
    pub help: String,
    pub statistics: String,
    pub run: String,
    pub left: String,
    pub right: String,
    pub backward: String,
    pub forward: String,
    pub jump: String,
    pub yes: String,
    pub no: String,
    pub wave: String,
    pub punch: String,
    pub thumbs_up: String,
}

/// Fog configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FogConfig {
    /// Whether fog starts enabled.
    pub enabled: bool,
    /// Fog colour as `0xRRGGBB`.
    pub color: u32,
    /// Distance where fog starts.
    pub near: f32,
    /// Distance where fog is opaque.
    pub far: f32,
}

/// Parameters for one view camera.
///
/// Orientation is in degrees; `h` is measured around the vertical axis and
/// `v` is the elevation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Fractional viewport used in multiple-views mode.
    pub multiple_views_viewport: Viewport,
    /// Point the camera orbits or sits at.
    pub target: Vec3,
    pub initial_orientation: Orientation,
    pub orientation_min: Orientation,
    pub orientation_max: Orientation,
    pub initial_distance: f32,
    pub distance_min: f32,
    pub distance_max: f32,
    pub initial_zoom: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Vertical field of view in degrees.
    pub initial_fov: f32,
    pub near: f32,
    pub far: f32,
}

/// Camera parameters for every view kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CamerasConfig {
    pub fixed: CameraConfig,
    pub first_person: CameraConfig,
    pub third_person: CameraConfig,
    pub top: CameraConfig,
    pub mini_map: CameraConfig,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Show the statistics overlay at start.
    pub show_statistics: bool,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Thumb Raiser".to_string(),
        }
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            url: PathBuf::from("mazes/Loquitas.json"),
            credits: "Maze designed by Cecilia Fernandes and Nikita.".to_string(),
            scale: Vec3::ONE,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            url: PathBuf::from("models/robot.json"),
            credits: "Model and related code by Tomás Laranjo.".to_string(),
            eye_height: 0.8,
            scale: Vec3::splat(0.1),
            walking_speed: 0.75,
            initial_direction: 0.0,
            turning_speed: 75.0,
            running_factor: 2.0,
            key_codes: KeyCodes::default(),
        }
    }
}

impl Default for KeyCodes {
    fn default() -> Self {
        Self {
            fixed_view: "Digit1".to_string(),
            first_person_view: "Digit2".to_string(),
            third_person_view: "Digit3".to_string(),
            top_view: "Digit4".to_string(),
            view_mode: "KeyV".to_string(),
            user_interface: "KeyU".to_string(),
            mini_map: "KeyM".to_string(),
            help: "KeyH".to_string(),
            statistics: "KeyS".to_string(),
            run: "KeyR".to_string(),
            left: "ArrowLeft".to_string(),
            right: "ArrowRight".to_string(),
            backward: "ArrowDown".to_string(),
            forward: "ArrowUp".to_string(),
            jump: "KeyJ".to_string(),
            yes: "KeyY".to_string(),
            no: "KeyN".to_string(),
            wave: "KeyW".to_string(),
            punch: "KeyP".to_string(),
            thumbs_up: "KeyT".to_string(),
        }
    }
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            color: 0xe0_e0_e0,
            near: 0.1,
            far: 14.0,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            multiple_views_viewport: Viewport::FULL,
            target: Vec3::ZERO,
            initial_orientation: Orientation::new(135.0, -45.0),
            orientation_min: Orientation::new(-180.0, -90.0),
            orientation_max: Orientation::new(180.0, 0.0),
            initial_distance: 8.0,
            distance_min: 4.0,
            distance_max: 16.0,
            initial_zoom: 1.0,
            zoom_min: 0.5,
            zoom_max: 2.0,
            initial_fov: 45.0,
            near: 0.01,
            far: 100.0,
        }
    }
}

impl Default for CamerasConfig {
    fn default() -> Self {
        Self {
            fixed: CameraConfig {
                multiple_views_viewport: Viewport::new(0.0, 1.0, 0.45, 0.5),
                ..CameraConfig::default()
            },
            first_person: CameraConfig {
                multiple_views_viewport: Viewport::new(1.0, 1.0, 0.55, 0.5),
                initial_orientation: Orientation::new(0.0, -10.0),
                orientation_min: Orientation::new(-45.0, -90.0),
                orientation_max: Orientation::new(45.0, 90.0),
                initial_distance: 2.0,
                distance_min: 1.0,
                distance_max: 4.0,
                ..CameraConfig::default()
            },
            third_person: CameraConfig {
                multiple_views_viewport: Viewport::new(0.0, 0.0, 0.55, 0.5),
                initial_orientation: Orientation::new(0.0, -20.0),
                initial_distance: 2.0,
                distance_min: 1.0,
                distance_max: 4.0,
                ..CameraConfig::default()
            },
            top: CameraConfig {
                multiple_views_viewport: Viewport::new(1.0, 0.0, 0.45, 0.5),
                initial_orientation: Orientation::new(0.0, -90.0),
                initial_distance: 4.0,
                distance_min: 1.0,
                distance_max: 16.0,
                ..CameraConfig::default()
            },
            mini_map: CameraConfig {
                multiple_views_viewport: Viewport::new(0.99, 0.02, 0.3, 0.3),
                initial_orientation: Orientation::new(180.0, -90.0),
                initial_zoom: 0.32,
                zoom_min: 0.32,
                zoom_max: 2.56,
                ..CameraConfig::default()
            },
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_statistics: false,
        }
    }
}

/// Default config directory (`<platform config dir>/thumb-raiser`), falling
/// back to the working directory when the platform has none.
#[must_use]
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("thumb-raiser"))
        .unwrap_or_else(|| PathBuf::from("."))
}

// --- Load / Save / Reload ---

impl Config {
    /// Resolve a config from partial overrides merged over the defaults.
    pub fn from_overrides(overrides: serde_json::Value) -> Result<Self, ConfigError> {
        merge_with_defaults(&Config::default(), overrides)
    }

    /// Load config from the given directory, or create a default config file.
    ///
    /// The file may be partial; anything it omits keeps its default, including
    /// fields of a single camera section.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(false)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(ConfigError::ReadError)?;
        let overrides: serde_json::Value =
            ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        Self::from_overrides(overrides)
    }
}
