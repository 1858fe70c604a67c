//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::error::Result;

/// Sign-in operations
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange username and password for a token
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse>;

    /// Create an account and receive a token for it
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse>;
}
