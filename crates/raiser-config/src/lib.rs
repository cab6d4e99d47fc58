//! Configuration system for Thumb Raiser.
//!
//! Designer defaults live in typed structs; partial overrides (from a RON
//! file or from code) are deep-merged over them once at construction.
//! Supports CLI overrides via clap and hot-reload detection.

mod cli;
mod config;
mod error;
pub mod merge;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, CamerasConfig, Config, DebugConfig, FogConfig, KeyCodes, MazeConfig,
    PlayerConfig, WindowConfig, default_config_dir,
};
pub use error::ConfigError;
pub use merge::{deep_merge, merge_with_defaults};
