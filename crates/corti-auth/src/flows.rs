//! Login, registration and logout against the portal's REST auth endpoints.

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::info;

use corti_core::models::User;

use crate::error::AuthError;
use crate::session::{Session, SessionHandle};

/// Wire shape of a successful `/api/v1/login` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Wire shape of a rejection body: `{"errors": ["Name can't be blank"]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorsResponse {
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A new-account request as entered into the registration form.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Refuse staff roles: clinicians and admins have their own application and
/// must not end up with a patient-portal session.
pub fn ensure_patient(user: &User) -> Result<(), AuthError> {
    if user.role.is_staff() {
        return Err(AuthError::StaffAccount);
    }
    Ok(())
}

/// Authenticate with email and password; on success the session is installed
/// into `handle` and the account is returned.
pub async fn login(
    http: &reqwest::Client,
    base_url: &str,
    handle: &SessionHandle,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    info!(email, "logging in");

    let resp = http
        .post(format!("{base_url}/api/v1/login"))
        .json(&serde_json::json!({
            "user": { "email": email, "password": password }
        }))
        .send()
        .await?;

    if resp.status() == StatusCode::UNAUTHORIZED {
        return Err(AuthError::InvalidCredentials);
    }
    if !resp.status().is_success() {
        return Err(AuthError::UnexpectedResponse(format!(
            "login returned {}",
            resp.status()
        )));
    }

    let body: LoginResponse = resp.json().await?;
    ensure_patient(&body.user)?;

    info!(role = ?body.user.role, "session established");
    let user = body.user.clone();
    handle
        .install(Session {
            token: body.token,
            user: body.user,
        })
        .await;

    Ok(user)
}

/// Create a patient account. The caller logs in separately afterwards.
pub async fn register(
    http: &reqwest::Client,
    base_url: &str,
    registration: &Registration,
) -> Result<(), AuthError> {
    if registration.password != registration.password_confirmation {
        return Err(AuthError::PasswordMismatch);
    }

    info!(email = %registration.email, "registering account");

    let resp = http
        .post(format!("{base_url}/api/v1/signup"))
        .json(&serde_json::json!({
            "user": {
                "name": registration.name,
                "email": registration.email,
                "password": registration.password,
                "password_confirmation": registration.password_confirmation,
            }
        }))
        .send()
        .await?;

    if resp.status().is_success() {
        return Ok(());
    }

    let status = resp.status();
    let body: ErrorsResponse = resp.json().await.unwrap_or_default();
    if body.errors.is_empty() {
        Err(AuthError::UnexpectedResponse(format!(
            "signup returned {status}"
        )))
    } else {
        Err(AuthError::Rejected(body.errors.join(", ")))
    }
}

/// Drop the local session. The token simply stops being presented; the
/// backend owns its expiry.
pub async fn logout(handle: &SessionHandle) {
    handle.invalidate().await;
    info!("session invalidated");
}
