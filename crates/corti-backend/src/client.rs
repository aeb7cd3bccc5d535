use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use corti_auth::SessionHandle;

use crate::error::ApiError;
use crate::graphql::{GraphQlRequest, GraphQlResponse};

/// Authenticated client for the portal backend.
///
/// Holds the shared HTTP client, the backend's base URL and the session
/// handle. Cloning is cheap; every clone presents the same session.
#[derive(Debug, Clone)]
pub struct PortalClient {
    pub(crate) http: reqwest::Client,
    base_url: String,
    session: SessionHandle,
}

impl PortalClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, session: SessionHandle) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            session,
        }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    pub(crate) fn rest_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) async fn bearer_token(&self) -> Result<String, ApiError> {
        self.session
            .bearer_token()
            .await
            .ok_or(ApiError::Unauthorized)
    }

    /// A 401 means the token is dead; drop the session so the application
    /// routes back to login instead of retrying with the same token.
    pub(crate) async fn check_status(&self, status: StatusCode) -> Result<(), ApiError> {
        if status == StatusCode::UNAUTHORIZED {
            self.session.invalidate().await;
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(())
    }

    /// Run one GraphQL operation against `{base_url}/graphql`.
    pub(crate) async fn execute<V, T>(&self, query: &str, variables: V) -> Result<T, ApiError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let token = self.bearer_token().await?;
        let resp = self
            .http
            .post(self.rest_url("/graphql"))
            .bearer_auth(token)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        self.check_status(resp.status()).await?;

        let envelope: GraphQlResponse<T> = resp.json().await?;
        envelope.into_data()
    }
}
