//! Error types for the portfolio view-state engine
//!
//! UI event handling never fails. Errors come from loading and checking
//! the site configuration, and from delivering the contact form.

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Reading the configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for `SiteConfig`
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The configuration parsed but describes an impossible page
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The form relay could not be reached or refused the submission
    #[error("Relay error: {0}")]
    Relay(String),

    /// Logging could not be installed (a global subscriber already exists)
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
