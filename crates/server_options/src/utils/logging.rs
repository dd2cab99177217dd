use tracing_subscriber::{EnvFilter, prelude::*};

use crate::errors::{ServerOptionsError, ServerOptionsResult};

/// Level used when `RUST_LOG` is not set; keeps option corrections visible
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Initialize logging based on environment configuration
///
/// Output goes to stderr so that resolved options printed on stdout remain
/// machine readable.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error).
///   Defaults to [`DEFAULT_LOG_LEVEL`].
pub fn init_logging() -> ServerOptionsResult<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter())
        .try_init()
        .map_err(|e| ServerOptionsError::LoggingInitialization(e.to_string()))?;

    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_filter_keeps_warnings() {
        if std::env::var("RUST_LOG").is_err() {
            assert_eq!(env_filter().max_level_hint(), Some(LevelFilter::WARN));
        }
    }

    #[test]
    fn test_logging_initializes_once() {
        assert!(init_logging().is_ok());
        assert!(matches!(
            init_logging(),
            Err(ServerOptionsError::LoggingInitialization(_))
        ));
    }
}
