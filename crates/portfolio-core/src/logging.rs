//! Logging setup.
//!
//! Console output through `tracing_subscriber`. `RUST_LOG` wins over the
//! directive from the site config.
//!
//! ```bash
//! # Follow every view-state change
//! RUST_LOG=portfolio_core=debug portfolio-desktop
//!
//! # Include per-task scheduler traffic
//! RUST_LOG=portfolio_core::scheduler=trace portfolio-desktop
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{PortfolioError, PortfolioResult};

/// Build the filter: `RUST_LOG` if set and parseable, else `config.directive`
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.directive))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &LoggingConfig) -> PortfolioResult<()> {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| PortfolioError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_error() {
        let config = LoggingConfig {
            directive: "warn".to_string(),
        };
        let _ = init(&config);
        assert!(matches!(init(&config), Err(PortfolioError::Logging(_))));
    }
}
