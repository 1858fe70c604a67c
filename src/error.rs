//! Error types for the authdesk CLI

use thiserror::Error;

/// Result type alias for authdesk operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server refused the submitted form; carries the message to show.
    #[error("{0}")]
    Rejected(String),

    /// The stored token was not accepted by the profile endpoint.
    #[error("Your session has expired. Run `authdesk login` to sign in again.")]
    SessionExpired,

    #[error("Connection error. Check that the server at {0} is running.")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// The profile could not be fetched or read; the session is kept.
    #[error("Error loading profile: {0}")]
    ProfileLoad(String),
}

impl ApiError {
    /// Map a reqwest transport error to a connection error for `base_url`.
    pub fn from_transport(err: &reqwest::Error, base_url: &str) -> Self {
        if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            log::debug!("transport error: {}", err);
            ApiError::Network(base_url.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Not signed in. Run `authdesk login` or `authdesk register` first.")]
    NotSignedIn,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Client-side form validation errors, raised before any request is sent
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}
