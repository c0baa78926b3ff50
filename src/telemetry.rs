//! Logging setup.

use crate::core::{LoggingConfig, Result, SizerError};

/// Initialize logging from configuration.
///
/// `RUST_LOG` overrides the configured filter when set. Calling this twice
/// returns an error instead of replacing the installed subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.directive())
            .map_err(|e| SizerError::logging(format!("Invalid log filter: {}", e)))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .compact(),
        )
        .try_init()
        .map_err(|e| SizerError::logging(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(directive = config.directive(), "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig::default();
        // Another test may have installed a subscriber first.
        let _ = init_logging(&config);
        let err = init_logging(&config).unwrap_err();
        assert_eq!(err.category(), "logging");
    }
}
