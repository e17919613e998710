//! Authentication types and session operations.
//!
//! This module provides the credential lifecycle: the [`CredentialStore`]
//! every request is authorized from, and the [`SessionOperations`] that
//! fill and clear it.

mod classify;
mod credential_store;
mod operations;
mod token;
mod user;

pub use classify::{
    Classification, DUPLICATE_EMAIL_MESSAGE, DUPLICATE_KEY_CODE, INVALID_CREDENTIALS_MESSAGE,
};
pub use credential_store::CredentialStore;
pub use operations::{RefreshOutcome, SessionOperations};
pub use token::BearerToken;
pub use user::{AuthResponse, UserData, UserProfile};
