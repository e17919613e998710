//! Error types for the connections library.
//!
//! This module provides a unified error type with explicit variants for
//! transport, API, authentication, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for connections operations.
///
/// This error type covers all possible failure modes in the library,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout, decoding).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The API answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Authentication errors (no persisted credential, missing token).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Input validation errors (invalid base URL, unusable token).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the API error if the server rejected the request.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the HTTP status code if the server rejected the request.
    pub fn status(&self) -> Option<u16> {
        self.as_api().map(|err| err.status)
    }

    /// Returns true for the refresh guard: no credential was persisted.
    pub fn is_not_authenticated(&self) -> bool {
        matches!(self, Error::Auth(AuthError::NotAuthenticated))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Response body could not be decoded.
    #[error("failed to decode response: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            TransportError::Decode {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No persisted credential was available to re-authenticate with.
    #[error("not authenticated")]
    NotAuthenticated,

    /// A successful signup or login response did not carry a token.
    #[error("response did not include a token")]
    MissingToken,
}

/// A non-success response from the API.
///
/// Every structured field is optional: bodies that are missing, not JSON,
/// or shaped differently simply leave them empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Structured error code (e.g. a database duplicate-key code).
    pub code: Option<i64>,
    /// Whether the body's key pattern names the email field.
    pub email_key: bool,
    /// Human-readable message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request failed with status code {}", self.status)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, code: Option<i64>, email_key: bool, message: Option<String>) -> Self {
        Self {
            status,
            code,
            email_key,
            message,
        }
    }

    /// Create an API error that carries nothing but its status.
    pub fn from_status(status: u16) -> Self {
        Self::new(status, None, false, None)
    }

    /// Check if this is a bad-request rejection.
    pub fn is_bad_request(&self) -> bool {
        self.status == 400
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Token cannot be sent as a header value.
    #[error("invalid token: {reason}")]
    Token { reason: String },
}
