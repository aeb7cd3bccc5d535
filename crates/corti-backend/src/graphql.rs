//! The GraphQL wire envelope.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A request body: the operation text plus its variables object.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// A response envelope: `data` when the operation succeeded, top-level
/// `errors` when it did not. Some servers return both; errors win, since
/// partial data is useless to the portal's screens.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.errors.is_empty() {
            return Err(ApiError::GraphQl(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data.ok_or(ApiError::MissingData)
    }
}
