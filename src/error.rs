//! Error types for the Recruit CLI

use std::time::Duration;
use thiserror::Error;

use crate::session::token::DecodeError;

/// Result type alias for Recruit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when a failed login carries no usable message of its own.
pub const LOGIN_FAILURE_FALLBACK: &str = "Invalid credentials or server error";

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Navigation to {requested} was redirected to {redirected_to}")]
    Redirected {
        requested: String,
        redirected_to: String,
    },
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(msg) => format!(": {}", msg),
        None => String::new(),
    }
}

/// API-related errors
///
/// Variants built from an HTTP error response carry the message extracted
/// from the body, if any.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed{}", detail(.0))]
    Unauthorized(Option<String>),

    #[error("Access denied. You don't have permission to access this resource{}", detail(.0))]
    Forbidden(Option<String>),

    #[error("Resource not found{}", detail(.0))]
    NotFound(Option<String>),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request{}", detail(.0))]
    BadRequest(Option<String>),

    #[error("Server error{}", detail(.0))]
    ServerError(Option<String>),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// The credential is missing, invalid or expired from the server's view.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    /// The credential is valid but lacks privilege for the request.
    pub fn is_authorization_failure(&self) -> bool {
        matches!(self, ApiError::Forbidden(_))
    }

    /// Message reported by the server, if the response carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::ServerError(msg) => msg.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Session lifecycle errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("Login response did not contain a token")]
    MissingToken,

    #[error("Received token could not be decoded: {0}")]
    InvalidToken(#[from] DecodeError),

    #[error("Received token is already expired")]
    ExpiredToken,
}

/// Local persistent storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not determine a data directory for local storage")]
    NoHome,

    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Storage database error: {0}")]
    Database(#[from] rusqlite::Error),
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
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_unauthorized_message() {
        let err = ApiError::Unauthorized(None);
        assert_eq!(err.to_string(), "Authentication failed");

        let err = ApiError::Unauthorized(Some("Token expired".to_string()));
        assert!(err.to_string().ends_with(": Token expired"));
    }

    #[test]
    fn test_api_error_forbidden_message() {
        let err = ApiError::Forbidden(None);
        assert!(err.to_string().contains("permission"));
    }

    #[test]
    fn test_api_error_rate_limit() {
        let err = ApiError::RateLimit(Duration::from_secs(30));
        let msg = err.to_string();
        assert!(msg.contains("Rate limit"));
        assert!(msg.contains("30"));
    }

    #[test]
    fn test_api_error_bad_request() {
        let err = ApiError::BadRequest(Some("User already exists!".to_string()));
        assert!(err.to_string().contains("User already exists!"));
    }

    #[test]
    fn test_api_error_network() {
        let err = ApiError::Network("Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_api_error_classification() {
        assert!(ApiError::Unauthorized(None).is_authentication_failure());
        assert!(!ApiError::Unauthorized(None).is_authorization_failure());
        assert!(ApiError::Forbidden(None).is_authorization_failure());
        assert!(!ApiError::Forbidden(None).is_authentication_failure());
        assert!(!ApiError::ServerError(None).is_authentication_failure());
    }

    #[test]
    fn test_api_error_server_message() {
        let err = ApiError::BadRequest(Some("Invalid credentials".to_string()));
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert_eq!(ApiError::Network("down".to_string()).server_message(), None);
        assert_eq!(ApiError::ServerError(None).server_message(), None);
    }

    #[test]
    fn test_session_error_messages() {
        assert!(
            SessionError::LoginFailed("Invalid credentials".to_string())
                .to_string()
                .contains("Invalid credentials")
        );
        assert!(SessionError::MissingToken.to_string().contains("token"));
    }

    #[test]
    fn test_redirected_message() {
        let err = Error::Redirected {
            requested: "/recruiter/dashboard".to_string(),
            redirected_to: "/candidate/dashboard".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/recruiter/dashboard"));
        assert!(msg.contains("/candidate/dashboard"));
    }

    #[test]
    fn test_error_from_api_error() {
        let err: Error = ApiError::Forbidden(None).into();

        match err {
            Error::Api(ApiError::Forbidden(None)) => (),
            _ => panic!("Expected Error::Api(ApiError::Forbidden)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
