//! Command-line argument parsing for Thumb Raiser.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Thumb Raiser command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "thumb-raiser", about = "Thumb Raiser maze walker")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Maze description file.
    #[arg(long)]
    pub maze: Option<PathBuf>,

    /// Player model description file.
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate before exiting.
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Actions held for the whole run (e.g. `--hold forward --hold run`).
    #[arg(long)]
    pub hold: Vec<String>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(ref maze) = args.maze {
            self.maze.url = maze.clone();
        }
        if let Some(ref model) = args.model {
            self.player.url = model.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
