//! Client-side session state fed by the session operations.
//!
//! The operations never touch this state themselves. Callers read the
//! persisted token out of it before [`refresh`](crate::SessionOperations::refresh)
//! and fold each operation's result back in with the `apply_*` methods.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::auth::{AuthResponse, BearerToken, RefreshOutcome, UserProfile};

/// What the client believes about the current user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Profile of the logged-in user.
    #[serde(default)]
    pub user: Option<UserProfile>,
    /// Credential retained across runs.
    #[serde(default)]
    pub token: Option<BearerToken>,
    /// Whether the client considers itself logged in.
    #[serde(default)]
    pub is_logged_in: bool,
    /// Whether a refresh is in flight.
    #[serde(default, skip_serializing)]
    pub is_refreshing: bool,
}

impl SessionState {
    /// An anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The credential `refresh` should re-apply, if any.
    pub fn persisted_token(&self) -> Option<&BearerToken> {
        self.token.as_ref()
    }

    /// Record a successful signup or login.
    pub fn apply_auth(&mut self, response: &AuthResponse) {
        self.user = Some(response.user());
        self.token = Some(response.token().clone());
        self.is_logged_in = true;
    }

    /// Reset to anonymous once logout has completed.
    pub fn apply_logout(&mut self) {
        *self = Self::default();
    }

    /// Mark a refresh as started.
    pub fn begin_refresh(&mut self) {
        self.is_refreshing = true;
    }

    /// Record the result of a refresh.
    ///
    /// Only a successful refresh changes the user. A failed refresh or the
    /// no-credential rejection leaves the session as it was.
    pub fn apply_refresh(&mut self, result: &Result<RefreshOutcome>) {
        if let Ok(RefreshOutcome::Refreshed(profile)) = result {
            self.user = Some(profile.clone());
            self.is_logged_in = true;
        }
        self.is_refreshing = false;
    }

    /// Returns the current user, if logged in.
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref().filter(|_| self.is_logged_in)
    }
}
