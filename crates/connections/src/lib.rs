//! connections - Authentication session client for the connections API
//!
//! This library registers, logs in, logs out and re-authenticates a user
//! against the connections phonebook API. All request-issuing calls flow
//! through a [`SessionOperations`] object, which keeps the bearer credential
//! in an explicit [`CredentialStore`] instead of a process-wide default.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use connections::{ApiUrl, SessionOperations, TracingNotifier, UserData};
//!
//! # async fn example() -> Result<(), connections::Error> {
//! let api = ApiUrl::new("https://connections-api.herokuapp.com")?;
//! let session = SessionOperations::new(api, Arc::new(TracingNotifier));
//!
//! let response = session
//!     .login(&UserData::login("alice@example.com", "secret123"))
//!     .await?;
//!
//! println!("Logged in as: {:?}", response.user().email());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod error;
pub mod http;
pub mod notify;
pub mod state;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{
    AuthResponse, BearerToken, Classification, CredentialStore, RefreshOutcome, SessionOperations,
    UserData, UserProfile,
};
pub use error::Error;
pub use http::ApiClient;
pub use notify::{Notifier, TracingNotifier};
pub use state::SessionState;
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
