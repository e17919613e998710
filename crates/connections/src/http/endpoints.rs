//! Endpoint paths and wire types.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// POST, creates an account and returns `{ user, token }`.
pub const SIGNUP: &str = "/users/signup";

/// POST, authenticates and returns `{ user, token }`.
pub const LOGIN: &str = "/users/login";

/// POST, invalidates the current token. No body either way.
pub const LOGOUT: &str = "/users/logout";

/// GET, returns the user the current token belongs to.
pub const CURRENT_USER: &str = "/users/current";

// ============================================================================
// Error Body
// ============================================================================

/// Error body format: `{ code, keyPattern: { email }, message }`.
///
/// Every field is optional and loosely typed so that unexpected shapes are
/// read as missing rather than failing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub key_pattern: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl ErrorBody {
    /// Parse a raw response body, treating anything unreadable as empty.
    pub fn parse(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }

    /// Convert into an [`ApiError`] for the given status.
    pub fn into_api_error(self, status: u16) -> ApiError {
        let code = self.code.as_ref().and_then(Value::as_i64);
        let email_key = self
            .key_pattern
            .as_ref()
            .and_then(|pattern| pattern.get("email"))
            .is_some_and(is_truthy);
        let message = self
            .message
            .as_ref()
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        ApiError::new(status, code, email_key, message)
    }
}

/// Whether a key-pattern entry marks its field as part of the index.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_duplicate_key_body() {
        let body = br#"{"code":11000,"keyPattern":{"email":1},"keyValue":{"email":"a@b.c"}}"#;
        let err = ErrorBody::parse(body).into_api_error(400);
        assert_eq!(err, ApiError::new(400, Some(11000), true, None));
    }

    #[test]
    fn tolerates_empty_body() {
        let err = ErrorBody::parse(b"").into_api_error(400);
        assert_eq!(err, ApiError::from_status(400));
    }

    #[test]
    fn tolerates_non_json_body() {
        let err = ErrorBody::parse(b"<html>Bad Gateway</html>").into_api_error(502);
        assert_eq!(err, ApiError::from_status(502));
    }

    #[test]
    fn tolerates_wrong_types() {
        let body = br#"{"code":"11000","keyPattern":"email","message":42}"#;
        let err = ErrorBody::parse(body).into_api_error(400);
        assert_eq!(err, ApiError::from_status(400));
    }

    #[test]
    fn zero_email_key_is_not_set() {
        let body = br#"{"code":11000,"keyPattern":{"email":0}}"#;
        let err = ErrorBody::parse(body).into_api_error(400);
        assert!(!err.email_key);
    }

    #[test]
    fn keeps_server_message() {
        let body = br#"{"message":"User validation failed: password too short"}"#;
        let err = ErrorBody::parse(body).into_api_error(400);
        assert_eq!(
            err.message.as_deref(),
            Some("User validation failed: password too short")
        );
    }
}
