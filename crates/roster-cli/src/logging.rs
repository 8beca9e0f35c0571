//! Logging setup
//!
//! Level comes from `ROSTER_LOG` (default `warn`). Output goes to the
//! configured log file, or to stderr when none is set.

use std::fs::OpenOptions;

use roster_core::Config;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ROSTER_LOG";

/// Initialize the global tracing subscriber
pub fn init(config: &Config) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let Some(ref log_path) = config.log_file else {
        // Ignore error if already initialized
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
        return;
    };

    let log_file = match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not open log file {:?}: {}", log_path, e);
            return;
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(log_file)
        .try_init();

    tracing::debug!("Logging to {:?}", log_path);
}
