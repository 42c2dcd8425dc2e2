//! Common error types for DataSync

use thiserror::Error;

/// Common result type for DataSync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across DataSync services
///
/// All validation variants are user-correctable input errors; none are
/// fatal. Validation happens at the boundary, before any state mutation.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Comment rejected: fewer words than the minimum
    #[error("Comment too short: {got} words (minimum {min})")]
    CommentTooShort { got: usize, min: usize },

    /// Re-extraction requested without a chosen source system
    #[error("No re-extraction source selected")]
    MissingSourceSelection,

    /// Outgoing email attempted with an empty body
    #[error("Email body cannot be empty")]
    EmptyEmailBody,

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Stable snake_case identifier for API error responses
    pub fn code(&self) -> &'static str {
        match self {
            Error::Io(_) => "io_error",
            Error::Config(_) => "config_error",
            Error::NotFound(_) => "not_found",
            Error::CommentTooShort { .. } => "comment_too_short",
            Error::MissingSourceSelection => "missing_source_selection",
            Error::EmptyEmailBody => "empty_email_body",
            Error::InvalidInput(_) => "invalid_input",
        }
    }
}
