//! Runtime configuration.
//!
//! Sources, highest priority first: command-line flags, environment
//! variables (`PTF_GLOBALS_PATH`, `RUST_LOG`), built-in defaults.

use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Globals file used when neither `--globals` nor `PTF_GLOBALS_PATH` is set.
pub const DEFAULT_GLOBALS_PATH: &str = ".ptf/globals.json";

/// Log filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Where the globals snapshot lives.
    pub globals_path: PathBuf,
}

impl Settings {
    /// Applies defaults to the values collected by the argument parser.
    #[must_use]
    pub fn resolve(globals: Option<PathBuf>) -> Self {
        Self {
            globals_path: globals.unwrap_or_else(|| PathBuf::from(DEFAULT_GLOBALS_PATH)),
        }
    }
}

/// Installs the global tracing subscriber. Logs go to stderr so that
/// command output on stdout stays machine-readable.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
