//! Mapping from raw failures to the message shown to the user.

use crate::error::{ApiError, Error};

/// Database error code the API reports for a unique-index violation.
pub const DUPLICATE_KEY_CODE: i64 = 11000;

/// Shown when signup collides with an existing account's email.
pub const DUPLICATE_EMAIL_MESSAGE: &str =
    "This email is already in use, try using different email or login into an existing account.";

/// Shown when login is rejected.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials, try again.";

/// The user-facing cause of a failed operation.
///
/// Computed from an [`Error`] only to pick a notification message; it is
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Signup conflicted with an existing email.
    DuplicateEmail,
    /// Login was rejected.
    InvalidCredentials,
    /// Anything else, with the message to show.
    Generic(String),
}

impl Classification {
    /// Classify a signup failure.
    ///
    /// A 400 carrying the duplicate-key code and an email key pattern is a
    /// [`DuplicateEmail`](Self::DuplicateEmail). Anything else prefers the
    /// server's message over the transport-level one.
    pub fn signup(err: &Error) -> Self {
        match err.as_api() {
            Some(api) if is_duplicate_email(api) => Classification::DuplicateEmail,
            Some(api) => match &api.message {
                Some(message) => Classification::Generic(message.clone()),
                None => Self::transport(err),
            },
            None => Self::transport(err),
        }
    }

    /// Classify a login failure. Any 400 means the credentials were rejected.
    pub fn login(err: &Error) -> Self {
        match err.as_api() {
            Some(api) if api.is_bad_request() => Classification::InvalidCredentials,
            _ => Self::transport(err),
        }
    }

    /// Classify using only the transport-level message.
    pub fn transport(err: &Error) -> Self {
        Classification::Generic(err.to_string())
    }

    /// Returns the notification text for this classification.
    pub fn message(&self) -> &str {
        match self {
            Classification::DuplicateEmail => DUPLICATE_EMAIL_MESSAGE,
            Classification::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE,
            Classification::Generic(message) => message,
        }
    }
}

fn is_duplicate_email(api: &ApiError) -> bool {
    api.is_bad_request() && api.code == Some(DUPLICATE_KEY_CODE) && api.email_key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AuthError, TransportError};

    fn api(status: u16, code: Option<i64>, email_key: bool, message: Option<&str>) -> Error {
        let message = message.map(str::to_string);
        Error::Api(ApiError::new(status, code, email_key, message))
    }

    #[test]
    fn duplicate_email_on_signup() {
        let err = api(400, Some(11000), true, Some("E11000 duplicate key"));
        let class = Classification::signup(&err);
        assert_eq!(class, Classification::DuplicateEmail);
        assert_eq!(class.message(), DUPLICATE_EMAIL_MESSAGE);
    }

    #[test]
    fn duplicate_code_without_email_key_is_generic() {
        let err = api(400, Some(11000), false, Some("E11000 on name"));
        assert_eq!(
            Classification::signup(&err),
            Classification::Generic("E11000 on name".to_string())
        );
    }

    #[test]
    fn duplicate_shape_on_other_status_is_generic() {
        let err = api(409, Some(11000), true, None);
        assert_eq!(
            Classification::signup(&err).message(),
            "request failed with status code 409"
        );
    }

    #[test]
    fn signup_prefers_server_message() {
        let err = api(400, None, false, Some("User validation failed"));
        let class = Classification::signup(&err);
        assert_eq!(class.message(), "User validation failed");
    }

    #[test]
    fn signup_falls_back_to_transport_message() {
        let err = api(500, None, false, None);
        assert_eq!(
            Classification::signup(&err).message(),
            "request failed with status code 500"
        );
    }

    #[test]
    fn any_bad_request_on_login_is_invalid_credentials() {
        let class = Classification::login(&api(400, None, false, None));
        assert_eq!(class, Classification::InvalidCredentials);
        assert_eq!(class.message(), INVALID_CREDENTIALS_MESSAGE);

        let class = Classification::login(&api(400, Some(11000), true, Some("whatever")));
        assert_eq!(class, Classification::InvalidCredentials);
    }

    #[test]
    fn login_ignores_server_message_otherwise() {
        let err = api(503, None, false, Some("maintenance"));
        assert_eq!(
            Classification::login(&err).message(),
            "request failed with status code 503"
        );
    }

    #[test]
    fn transport_failures_are_generic() {
        let err = Error::Transport(TransportError::Timeout);
        assert_eq!(
            Classification::login(&err).message(),
            "transport error: request timed out"
        );
        assert_eq!(
            Classification::signup(&err).message(),
            "transport error: request timed out"
        );

        let err = Error::from(AuthError::MissingToken);
        assert!(matches!(Classification::signup(&err), Classification::Generic(_)));
    }
}
