use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No live session, or the backend answered 401. The caller should send
    /// the user back through login.
    #[error("not signed in or session expired")]
    Unauthorized,

    /// Top-level GraphQL errors: the operation itself failed.
    #[error("GraphQL error: {}", .0.join(", "))]
    GraphQl(Vec<String>),

    /// The mutation ran but the backend refused the input, returning
    /// field-level messages in the payload's `errors` list.
    #[error("rejected: {}", .0.join(", "))]
    Rejected(Vec<String>),

    /// A success response that is missing the object it promised.
    #[error("response missing expected data")]
    MissingData,

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}
