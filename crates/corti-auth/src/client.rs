use std::time::Duration;

use crate::error::AuthError;

/// Client-level timeout applied to every portal request, so even the
/// unbounded-looking calls can't hang a form forever.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the HTTP client shared by the auth flows and the portal client.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, AuthError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(client)
}
