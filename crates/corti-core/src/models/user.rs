use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The authenticated account as echoed by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: UserRole,
}

/// Account role. The patient portal only admits patients; staff accounts
/// belong to the clinician application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum UserRole {
    Patient,
    Audiologist,
    Admin,
}

impl UserRole {
    pub fn is_staff(self) -> bool {
        matches!(self, UserRole::Audiologist | UserRole::Admin)
    }
}
