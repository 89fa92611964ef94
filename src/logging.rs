//! Subscriber setup for the `tracing` events emitted by the SDK crates.

use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed
    #[error("log subscriber already installed")]
    AlreadyInstalled,
}

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; `default_filter` (for example
/// `"neo_sdk_vm=debug"`) applies when it is unset.
pub fn init(default_filter: &str) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)?,
    };

    let builder = fmt().with_env_filter(filter).with_target(true);

    #[cfg(feature = "json-logs")]
    let result = builder.json().try_init();
    #[cfg(not(feature = "json-logs"))]
    let result = builder.try_init();

    result.map_err(|_| LoggingError::AlreadyInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_filter() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(matches!(
                init("neo_sdk_vm=notalevel"),
                Err(LoggingError::Filter(_))
            ));
        }
    }

    #[test]
    fn test_second_init_fails() {
        let first = init("warn");
        let second = init("warn");
        assert!(first.is_ok() || matches!(first, Err(LoggingError::AlreadyInstalled)));
        assert!(matches!(second, Err(LoggingError::AlreadyInstalled)));
    }
}
