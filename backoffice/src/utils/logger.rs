//! Logging Infrastructure
//!
//! Tracing events go to the console's log pane through `tui-logger` and,
//! when a log directory is configured, to a daily rolling file.

use std::path::Path;

use shared::error::{AppError, AppResult, ErrorCode};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logger for the console
///
/// `RUST_LOG` wins over `log_level` when set.
pub fn init_logger(log_level: &str, log_dir: Option<&Path>) -> AppResult<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    if let Some(dir) = log_dir {
        std::fs::create_dir_all(dir).map_err(|e| {
            AppError::with_message(
                ErrorCode::ConfigError,
                format!("Cannot create log directory {}: {e}", dir.display()),
            )
        })?;
    }

    // Add file output if log_dir is set
    let file_layer = log_dir.map(|dir| {
        let file_appender = tracing_appender::rolling::daily(dir, "backoffice");
        tracing_subscriber::fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(file_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| {
            AppError::with_message(
                ErrorCode::InternalError,
                format!("Failed to install logger: {e}"),
            )
        })?;

    // Bridge the `log` facade for dependencies that use it
    let level = level_filter(log_level);
    tui_logger::init_logger(level).ok();
    tui_logger::set_default_level(level);
    Ok(())
}

/// `log` level for the pane; anything that is not a bare level means Info
fn level_filter(log_level: &str) -> log::LevelFilter {
    log_level.trim().parse().unwrap_or(log::LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("debug"), log::LevelFilter::Debug);
        assert_eq!(level_filter(" WARN "), log::LevelFilter::Warn);
        assert_eq!(level_filter("info,backoffice=trace"), log::LevelFilter::Info);
    }
}
