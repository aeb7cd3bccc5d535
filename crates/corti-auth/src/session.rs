//! The session capability.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use corti_core::models::User;

/// An authenticated portal session: the bearer token and the account it was
/// issued for. Token issuance and expiry are the backend's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Shared handle to the (at most one) live session.
///
/// Cloning shares the underlying slot: the handle is created once at startup
/// and passed to every component that makes authenticated calls. [`flows::login`]
/// fills it; [`SessionHandle::invalidate`] empties it — on explicit logout or
/// when any call sees a 401.
///
/// [`flows::login`]: crate::flows::login
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn install(&self, session: Session) {
        *self.inner.write().await = Some(session);
    }

    /// The bearer token of the live session, if any.
    pub async fn bearer_token(&self) -> Option<String> {
        self.inner.read().await.as_ref().map(|s| s.token.clone())
    }

    pub async fn current_user(&self) -> Option<User> {
        self.inner.read().await.as_ref().map(|s| s.user.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.is_some()
    }

    /// Drop the live session. Idempotent.
    pub async fn invalidate(&self) {
        *self.inner.write().await = None;
    }
}
