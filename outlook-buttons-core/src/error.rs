//! Error types for building Outlook deep links.

use thiserror::Error;

/// Errors that can occur while building links or loading configuration.
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD, YYYY-MM-DDTHH:MM[:SS] or RFC 3339")]
    InvalidDate(String),

    #[error("Unknown calendar variant '{0}'. Expected 'live' or 'office'")]
    UnknownVariant(String),

    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for link operations.
pub type LinkResult<T> = Result<T, LinkError>;
