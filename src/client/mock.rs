//! Mock authentication API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real HTTP calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, ProfileApi};
use super::models::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockAuthClient::new()
///     .with_profile(profile)
///     .await
///     .with_error(ApiError::SessionExpired)
///     .await;
/// ```
#[derive(Default)]
pub struct MockAuthClient {
    /// Response for login and register; defaults to one echoing the request
    auth_response: Arc<Mutex<Option<AuthResponse>>>,
    /// Profile to return from get_profile
    profile: Arc<Mutex<Option<UserProfile>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Tokens presented to get_profile
    seen_tokens: Arc<Mutex<Vec<String>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub register: usize,
    pub get_profile: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.login + self.register + self.get_profile
    }
}

impl MockAuthClient {
    /// Create a new mock client with default responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the response to login and register.
    pub async fn with_auth_response(self, response: AuthResponse) -> Self {
        *self.auth_response.lock().await = Some(response);
        self
    }

    /// Configure the profile returned from get_profile.
    pub async fn with_profile(self, profile: UserProfile) -> Self {
        *self.profile.lock().await = Some(profile);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Tokens presented to get_profile, in call order.
    pub async fn seen_tokens(&self) -> Vec<String> {
        self.seen_tokens.lock().await.clone()
    }

    async fn check_error(&self) -> Result<()> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        Ok(())
    }

    async fn auth_response_for(&self, username: &str, email: &str) -> AuthResponse {
        self.auth_response
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| AuthResponse {
                token: "mock-token".to_string(),
                username: username.to_string(),
                email: email.to_string(),
            })
    }
}

#[async_trait]
impl AuthApi for MockAuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.call_count.lock().await.login += 1;
        self.check_error().await?;

        let email = format!("{}@example.com", request.username);
        Ok(self.auth_response_for(&request.username, &email).await)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.call_count.lock().await.register += 1;
        self.check_error().await?;

        Ok(self
            .auth_response_for(&request.username, &request.email)
            .await)
    }
}

#[async_trait]
impl ProfileApi for MockAuthClient {
    async fn get_profile(&self, token: &str) -> Result<UserProfile> {
        self.call_count.lock().await.get_profile += 1;
        self.seen_tokens.lock().await.push(token.to_string());
        self.check_error().await?;

        self.profile
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::SessionExpired.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_login_echoes_username() {
        let mock = MockAuthClient::new();
        let resp = mock
            .login(&LoginRequest {
                username: "alice".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(resp.username, "alice");
        assert_eq!(mock.call_counts().await.login, 1);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockAuthClient::new()
            .with_error(ApiError::Rejected("nope".to_string()))
            .await;
        let req = LoginRequest {
            username: "alice".to_string(),
            password: "pw".to_string(),
        };

        assert!(mock.login(&req).await.is_err());
        assert!(mock.login(&req).await.is_ok());
        assert_eq!(mock.call_counts().await.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_profile_without_fixture_is_expired() {
        let mock = MockAuthClient::new();
        assert!(mock.get_profile("tok").await.is_err());
        assert_eq!(mock.seen_tokens().await, vec!["tok".to_string()]);
    }
}
