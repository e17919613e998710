//! Register, login, logout and refresh against the connections API.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::error::{AuthError, Error};
use crate::http::ApiClient;
use crate::http::endpoints::{CURRENT_USER, LOGIN, LOGOUT, SIGNUP};
use crate::notify::Notifier;
use crate::types::ApiUrl;

use super::classify::Classification;
use super::credential_store::CredentialStore;
use super::token::BearerToken;
use super::user::{AuthResponse, UserData, UserProfile};

/// Result of a [`refresh`](SessionOperations::refresh) that got past its guard.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The credential is still accepted; this is the current user.
    Refreshed(UserProfile),
    /// The request failed. The user has been notified.
    Unavailable,
}

impl RefreshOutcome {
    /// Returns the profile if the refresh succeeded.
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            RefreshOutcome::Refreshed(profile) => Some(profile),
            RefreshOutcome::Unavailable => None,
        }
    }
}

/// The authentication operations of one client session.
///
/// Each operation issues a single request, keeps the session's
/// [`CredentialStore`] in step with the outcome, and reports a failure to the
/// user through the [`Notifier`] exactly once.
///
/// Failures propagate differently per operation:
///
/// - [`register`](Self::register) and [`login`](Self::login) notify and then
///   return the error.
/// - [`logout`](Self::logout) and [`refresh`](Self::refresh) notify and then
///   complete normally.
///
/// # Thread Safety
///
/// Cheap to clone; clones share the credential store. Operations are not
/// serialized against each other, so the last `set`/`unset` to run wins.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use connections::{ApiUrl, SessionOperations, TracingNotifier, UserData};
///
/// # async fn example() -> Result<(), connections::Error> {
/// let session = SessionOperations::new(ApiUrl::default(), Arc::new(TracingNotifier));
/// let data = UserData::signup("Alice", "alice@example.com", "secret123");
/// let response = session.register(&data).await?;
///
/// assert!(session.credentials().is_set());
/// println!("Registered {:?}", response.user().name());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SessionOperations {
    client: ApiClient,
    credentials: CredentialStore,
    notifier: Arc<dyn Notifier>,
}

impl SessionOperations {
    /// Create operations against `api` with a fresh, empty credential store.
    pub fn new(api: ApiUrl, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_client(ApiClient::new(api), CredentialStore::new(), notifier)
    }

    /// Create operations from an existing client and credential store.
    pub fn with_client(
        client: ApiClient,
        credentials: CredentialStore,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            client,
            credentials,
            notifier,
        }
    }

    /// Returns the credential store requests are authorized with.
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Create an account.
    ///
    /// On success the issued token is installed in the credential store and
    /// the full response body is returned.
    ///
    /// # Errors
    ///
    /// Any failure is notified (a duplicate email gets its own message) and
    /// then returned. A success response without a string `token` fails with
    /// [`AuthError::MissingToken`] and leaves the credential store untouched.
    #[instrument(skip(self, user_data), fields(email = %user_data.email()))]
    pub async fn register(&self, user_data: &UserData) -> Result<AuthResponse, Error> {
        info!("Registering account");

        self.authenticate(SIGNUP, user_data)
            .await
            .inspect_err(|err| self.report(Classification::signup(err)))
    }

    /// Log into an existing account.
    ///
    /// On success the issued token is installed in the credential store and
    /// the full response body is returned.
    ///
    /// # Errors
    ///
    /// Any failure is notified (a 400 is reported as invalid credentials) and
    /// then returned. A success response without a string `token` fails with
    /// [`AuthError::MissingToken`] and leaves the credential store untouched.
    #[instrument(skip(self, user_data), fields(email = %user_data.email()))]
    pub async fn login(&self, user_data: &UserData) -> Result<AuthResponse, Error> {
        info!("Logging in");

        self.authenticate(LOGIN, user_data)
            .await
            .inspect_err(|err| self.report(Classification::login(err)))
    }

    /// Log out of the current session.
    ///
    /// The credential is cleared only when the server confirms the logout.
    /// A failure is notified and swallowed, leaving the credential in place.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        info!("Logging out");

        match self.client.post_empty(LOGOUT, &self.credentials).await {
            Ok(()) => {
                self.credentials.unset();
                debug!("Logged out");
            }
            Err(err) => self.report(Classification::transport(&err)),
        }
    }

    /// Re-authenticate with a persisted credential and fetch the current user.
    ///
    /// The credential is installed before the request is sent, whatever the
    /// request's outcome. A failed request is notified and reported as
    /// [`RefreshOutcome::Unavailable`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] without touching the network,
    /// the store or the notifier when `persisted` is `None`.
    #[doc(alias = "fetch_current_user")]
    #[instrument(skip(self, persisted), fields(persisted = persisted.is_some()))]
    pub async fn refresh(&self, persisted: Option<&BearerToken>) -> Result<RefreshOutcome, Error> {
        let Some(token) = persisted else {
            debug!("No persisted credential, skipping refresh");
            return Err(AuthError::NotAuthenticated.into());
        };

        info!("Refreshing current user");
        self.credentials.set(token.clone());

        let client = &self.client;
        match client.get::<Value>(CURRENT_USER, &self.credentials).await {
            Ok(body) => {
                debug!("Current user restored");
                Ok(RefreshOutcome::Refreshed(UserProfile::new(body)))
            }
            Err(err) => {
                self.report(Classification::transport(&err));
                Ok(RefreshOutcome::Unavailable)
            }
        }
    }

    /// Send credentials to `path` and install the token from the response.
    async fn authenticate(&self, path: &str, user_data: &UserData) -> Result<AuthResponse, Error> {
        let body: Value = self
            .client
            .post_json(path, user_data, &self.credentials)
            .await?;
        let response = AuthResponse::from_body(body)?;

        self.credentials.set(response.token().clone());
        debug!("Credential installed");

        Ok(response)
    }

    fn report(&self, classification: Classification) {
        debug!(?classification, "Operation failed");
        self.notifier.notify(classification.message());
    }
}

// Custom Debug impl: the notifier is an opaque capability
impl std::fmt::Debug for SessionOperations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionOperations")
            .field("api", self.client.api())
            .field("credentials", &self.credentials)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl Notifier for Recorder {
        fn notify(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    #[tokio::test]
    async fn refresh_without_credential_is_a_guarded_no_op() {
        let recorder = Arc::new(Recorder::default());
        // Nothing listens here; any request would fail and be notified.
        let api = ApiUrl::new("http://127.0.0.1:9").unwrap();
        let session = SessionOperations::new(api, recorder.clone());

        let err = session.refresh(None).await.unwrap_err();

        assert!(err.is_not_authenticated());
        assert!(!session.credentials().is_set());
        assert!(recorder.0.lock().unwrap().is_empty());
    }

    #[test]
    fn debug_hides_credential() {
        let session = SessionOperations::new(ApiUrl::default(), Arc::new(crate::TracingNotifier));
        session.credentials().set(BearerToken::new("super-secret"));
        let debug = format!("{:?}", session);
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn outcome_profile() {
        let profile = UserProfile::new(serde_json::json!({"name": "Alice"}));
        assert_eq!(
            RefreshOutcome::Refreshed(profile.clone()).profile(),
            Some(&profile)
        );
        assert_eq!(RefreshOutcome::Unavailable.profile(), None);
    }
}
