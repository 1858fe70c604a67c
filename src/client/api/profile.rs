//! Profile API trait

use async_trait::async_trait;

use crate::client::models::UserProfile;
use crate::error::Result;

/// Operations that require a bearer token
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Fetch the profile of the user the token belongs to.
    ///
    /// Any non-success status is reported as `ApiError::SessionExpired`.
    async fn get_profile(&self, token: &str) -> Result<UserProfile>;
}
