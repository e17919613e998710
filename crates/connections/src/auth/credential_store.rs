//! The credential slot shared by every request of a session.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use super::token::BearerToken;

/// Holds the bearer credential attached to outgoing requests.
///
/// There is exactly one credential slot per store. Every request issued
/// through [`ApiClient`](crate::ApiClient) with this store carries the value
/// from the most recent [`set`](Self::set) or [`unset`](Self::unset).
///
/// Clones share the same slot, so a store can be handed to several
/// components of one session. Separate sessions use separate stores.
#[derive(Clone, Default)]
pub struct CredentialStore {
    slot: Arc<RwLock<Option<BearerToken>>>,
}

impl CredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `token` as the authorization value, replacing any previous one.
    pub fn set(&self, token: BearerToken) {
        debug!("Setting bearer credential");
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    /// Clear the authorization value.
    pub fn unset(&self) {
        debug!("Clearing bearer credential");
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Returns the current credential, if any.
    pub fn get(&self) -> Option<BearerToken> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns true if a credential is installed.
    pub fn is_set(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Returns the `Authorization` header value for the current credential.
    pub(crate) fn authorization(&self) -> Option<String> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(BearerToken::header_value)
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("is_set", &self.is_set())
            .finish()
    }
}
