//! JSON-over-HTTP client for the connections API.

use std::time::Duration;

use reqwest::RequestBuilder;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use crate::auth::CredentialStore;
use crate::error::{ApiError, Error, InvalidInputError};
use crate::types::ApiUrl;

use super::endpoints::ErrorBody;

/// HTTP client bound to one API base URL.
///
/// The client holds no credential of its own. Every request method takes the
/// [`CredentialStore`] whose value should be sent, so two sessions can share
/// one client (and its connection pool) without seeing each other's token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl ApiClient {
    /// Create a new client for the given API base URL.
    pub fn new(api: ApiUrl) -> Self {
        Self::build(api, None).expect("failed to build HTTP client")
    }

    /// Create a client whose requests fail after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_timeout(api: ApiUrl, timeout: Duration) -> Result<Self, Error> {
        Self::build(api, Some(timeout))
    }

    fn build(api: ApiUrl, timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("connections/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, api })
    }

    /// Returns the API base URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// POST a JSON body and parse the JSON response.
    #[instrument(skip(self, body, credentials), fields(api = %self.api))]
    pub async fn post_json<B, R>(
        &self,
        path: &str,
        body: &B,
        credentials: &CredentialStore,
    ) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(%url, "POST");

        let request = authorize(self.client.post(&url).json(body), credentials)?;
        let response = request.send().await?;

        self.handle_response(response).await
    }

    /// POST without a body, ignoring any response body.
    #[instrument(skip(self, credentials), fields(api = %self.api))]
    pub async fn post_empty(&self, path: &str, credentials: &CredentialStore) -> Result<(), Error> {
        let url = self.api.endpoint(path);
        debug!(%url, "POST (no body)");

        let request = authorize(self.client.post(&url), credentials)?;
        let response = request.send().await?;

        let status = response.status();
        trace!(status = %status, "response");
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Api(self.parse_error_response(response).await))
        }
    }

    /// GET and parse the JSON response.
    #[instrument(skip(self, credentials), fields(api = %self.api))]
    pub async fn get<R>(&self, path: &str, credentials: &CredentialStore) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(%url, "GET");

        let request = authorize(self.client.get(&url), credentials)?;
        let response = request.send().await?;

        self.handle_response(response).await
    }

    /// Handle a response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            let body = response.json::<R>().await?;
            Ok(body)
        } else {
            Err(Error::Api(self.parse_error_response(response).await))
        }
    }

    /// Parse an error response, keeping whatever structure is present.
    async fn parse_error_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        // An unreadable body still yields the status
        let body = match response.bytes().await {
            Ok(bytes) => ErrorBody::parse(&bytes),
            Err(_) => ErrorBody::default(),
        };

        body.into_api_error(status)
    }
}

/// Attach the store's current credential, if any, to a request.
fn authorize(
    request: RequestBuilder,
    credentials: &CredentialStore,
) -> Result<RequestBuilder, Error> {
    match credentials.authorization() {
        Some(value) => {
            let mut value = HeaderValue::from_str(&value).map_err(|e| InvalidInputError::Token {
                reason: e.to_string(),
            })?;
            value.set_sensitive(true);
            Ok(request.header(AUTHORIZATION, value))
        }
        None => Ok(request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::BearerToken;

    #[test]
    fn client_creation() {
        let api = ApiUrl::default();
        let client = ApiClient::new(api.clone());
        assert_eq!(client.api().as_str(), api.as_str());
    }

    #[test]
    fn client_with_timeout() {
        let client = ApiClient::with_timeout(ApiUrl::default(), Duration::from_secs(5)).unwrap();
        assert_eq!(client.api(), &ApiUrl::default());
    }

    #[test]
    fn rejects_token_with_control_characters() {
        let credentials = CredentialStore::new();
        credentials.set(BearerToken::new("bad\ntoken"));

        let client = reqwest::Client::new();
        let result = authorize(client.get("https://example.com"), &credentials);
        assert!(matches!(
            result,
            Err(Error::InvalidInput(InvalidInputError::Token { .. }))
        ));
    }

    #[test]
    fn unset_store_sends_no_authorization() {
        let credentials = CredentialStore::new();
        let client = reqwest::Client::new();
        let request = authorize(client.get("https://example.com"), &credentials)
            .unwrap()
            .build()
            .unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn set_store_sends_bearer_authorization() {
        let credentials = CredentialStore::new();
        credentials.set(BearerToken::new("abc"));
        let client = reqwest::Client::new();
        let request = authorize(client.get("https://example.com"), &credentials)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer abc");
    }
}
