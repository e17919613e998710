//! User-facing request and response payloads.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AuthError, Error};

use super::token::BearerToken;

/// Registration or login fields sent as the request body.
///
/// The fields are not validated here; the API is the authority on what
/// a valid name, email or password looks like.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use connections::UserData;
///
/// let data = UserData::login("alice@example.com", "secret123");
/// assert_eq!(data.email(), "alice@example.com");
/// ```
#[derive(Clone, Serialize)]
pub struct UserData {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    email: String,
    password: String,
}

impl UserData {
    /// Fields for creating a new account.
    pub fn signup(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Fields for logging into an existing account.
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: None,
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the display name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the email address.
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Debug for UserData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserData")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// The user object returned by the API.
///
/// Kept as the raw JSON the server sent; the accessors only read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Value);

impl UserProfile {
    /// Wrap a JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the `name` field, if present.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Returns the `email` field, if present.
    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }

    /// Returns the underlying JSON.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// A successful signup or login response.
///
/// Holds the body exactly as the server sent it, together with the token
/// extracted from it.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthResponse {
    token: BearerToken,
    body: Value,
}

impl AuthResponse {
    /// Build a response from a raw body, extracting its `token` field.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingToken`] if the body has no string `token`.
    pub fn from_body(body: Value) -> Result<Self, Error> {
        let token = body
            .get("token")
            .and_then(Value::as_str)
            .map(BearerToken::new)
            .ok_or(AuthError::MissingToken)?;

        Ok(Self { token, body })
    }

    /// Returns the issued token.
    pub fn token(&self) -> &BearerToken {
        &self.token
    }

    /// Returns the `user` object of the response.
    pub fn user(&self) -> UserProfile {
        UserProfile::new(self.body.get("user").cloned().unwrap_or(Value::Null))
    }

    /// Returns the body as sent by the server.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Consumes the response, returning the body as sent by the server.
    pub fn into_inner(self) -> Value {
        self.body
    }
}
