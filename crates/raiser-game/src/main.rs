//! Headless Thumb Raiser driver.
//!
//! Loads the configured maze and player model, then runs the fixed-timestep
//! loop for `--frames` frames with the `--hold` actions pressed, logging the
//! session milestones and what the renderer would draw.
//!
//! Run with: `cargo run -p raiser-game -- --maze mazes/small.json --hold forward`

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use raiser_config::{CliArgs, Config, default_config_dir};
use raiser_game::{FIXED_DT, Frame, GameLoop, Session, SessionStatus};
use raiser_input::Action;
use tracing::{debug, error, info, warn};

const LOAD_TIMEOUT: Duration = Duration::from_secs(10);

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let (mut config, config_error) = match Config::load_or_create(&config_dir) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    config.apply_cli_overrides(&args);

    raiser_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );
    if let Some(err) = config_error {
        warn!("Using default config: {err}");
    }

    info!("Thumb Raiser");
    info!(
        "Window: {}x{} | Maze: {} | Model: {}",
        config.window.width,
        config.window.height,
        config.maze.url.display(),
        config.player.url.display()
    );

    let held: Vec<Action> = args
        .hold
        .iter()
        .filter_map(|name| {
            let action = Action::from_name(name);
            if action.is_none() {
                warn!("Unknown action '{name}' in --hold; ignored");
            }
            action
        })
        .collect();

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    if !session.wait_for_resources(LOAD_TIMEOUT) {
        error!("Session did not start: {:?}", session.status());
        return ExitCode::FAILURE;
    }
    debug!("Help:\n{}", session.help_table().to_text());

    for &action in &held {
        session.set_action(action, true);
    }

    let mut game_loop = GameLoop::new();
    let mut last_frame: Option<Frame> = None;
    let mut status = session.status();
    for _ in 0..args.frames {
        game_loop.advance(FIXED_DT, |dt| {
            if let Some(frame) = session.update(dt) {
                last_frame = Some(frame);
            }
        });
        let current = session.status();
        if current != status {
            info!("Session status: {current:?}");
            status = current;
        }
        if game_loop.frame_count() % 60 == 0
            && let Some(player) = session.player()
        {
            debug!(
                "t={:.1}s position={} direction={:.1} animation={:?}",
                game_loop.total_sim_time(),
                player.position,
                player.direction,
                session.animation()
            );
        }
        if status == SessionStatus::Failed {
            break;
        }
    }

    if let Some(frame) = last_frame {
        let views: Vec<&str> = frame.views.iter().map(|view| view.kind.as_str()).collect();
        info!(
            "Last frame: views=[{}] fog={} position={} animation={:?}",
            views.join(", "),
            frame.fog.enabled,
            frame.player.position,
            frame.player.animation
        );
    }
    info!(
        "Simulated {:.1}s over {} frames; final status {:?}",
        game_loop.total_sim_time(),
        game_loop.frame_count(),
        session.status()
    );
    ExitCode::SUCCESS
}
