//! Structured logging for Thumb Raiser.
//!
//! Console output with uptime timestamps and targets, plus a JSON log file in
//! debug builds. The filter comes from `RUST_LOG` when set, otherwise from the
//! configured log level.

use raiser_config::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "thumb_raiser.log";

/// Install the global tracing subscriber.
///
/// * `log_dir` - directory for the JSON log file (debug builds only)
/// * `debug_build` - whether to add the JSON file layer
/// * `config` - source of the log level when `RUST_LOG` is unset
///
/// Returns `false` if a global subscriber was already installed.
///
/// ```no_run
/// use raiser_config::Config;
/// use raiser_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) -> bool {
    let filter_str = filter_directive(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        let installed = subscriber.with(file_layer).try_init().is_ok();
        if installed {
            tracing::debug!("Logging to {} with filter '{filter_str}'", log_dir.display());
        }
        return installed;
    }

    let installed = subscriber.try_init().is_ok();
    if installed {
        tracing::debug!("Logging with filter '{filter_str}'");
    }
    installed
}

/// The filter directive derived from config, ignoring `RUST_LOG`.
#[must_use]
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.trim().to_string()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// An `EnvFilter` with the default directive.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
