//! User profile model

use serde::{Deserialize, Serialize};

/// Profile returned by `GET /users/profile`, kept as the server sent it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Numeric user ID
    pub id: i64,

    /// Username
    pub username: String,

    /// Email address
    pub email: String,

    /// Role name, e.g. `ROLE_USER`
    #[serde(default)]
    pub role: String,

    /// Account creation timestamp as the server formats it
    #[serde(default)]
    pub created_at: Option<String>,
}
