use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Staff accounts (audiologist, admin) must sign in through the
    /// clinician application; the patient portal refuses them.
    #[error("staff accounts must sign in through the clinician portal")]
    StaffAccount,

    #[error("passwords do not match")]
    PasswordMismatch,

    /// The backend rejected the request with field-level messages.
    #[error("registration rejected: {0}")]
    Rejected(String),

    #[error("not signed in")]
    NotAuthenticated,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
