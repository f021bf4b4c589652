//! Logging setup and convenience wrappers.

use std::path::Path;

use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Prefix of the daily log files.
pub const LOG_FILE_PREFIX: &str = "antigravity.log";

/// Install the global subscriber.
///
/// `RUST_LOG` overrides `default_level`. With `log_dir`, records are also
/// written to a daily-rolling file; keep the returned guard alive until exit.
pub fn init_logger(default_level: &str, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let console = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init();
    if let Err(e) = installed {
        eprintln!("Logger already initialized: {}", e);
    }
    guard
}

/// Log info message.
pub(crate) fn log_info(message: &str) {
    info!("{}", message);
}

/// Log warning message.
pub(crate) fn log_warn(message: &str) {
    warn!("{}", message);
}

/// Log error message.
pub(crate) fn log_error(message: &str) {
    error!("{}", message);
}
