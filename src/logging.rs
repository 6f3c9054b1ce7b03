//! Logging setup.
//!
//! All diagnostics go through `tracing` and are written to stderr, leaving
//! stdout to command output.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings and errors only.
    #[default]
    Quiet,
    /// Info and above.
    Normal,
    /// Debug and above.
    Verbose,
    /// Everything.
    Trace,
}

impl Verbosity {
    /// Maps a `-v` count to a verbosity.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Quiet,
            1 => Self::Normal,
            2 => Self::Verbose,
            _ => Self::Trace,
        }
    }

    /// Convert verbosity to tracing level filter.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::WARN,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `verbosity`. Calling this more than once
/// is harmless; only the first call installs anything.
pub fn init_logging(verbosity: Verbosity) {
    let default_filter = format!("tick={}", verbosity.to_level_filter());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time(),
    );

    let _ = subscriber.try_init();
}
