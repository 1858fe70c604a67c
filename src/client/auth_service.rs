//! Authentication service client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{AuthApi, ProfileApi};
use super::models::{AuthResponse, ErrorBody, LoginRequest, RegisterRequest, UserProfile};
use crate::error::{ApiError, Result};

/// Shown when a rejected login carries no message
const LOGIN_FAILED: &str = "Login failed";

/// Shown when a rejected registration carries no message
const REGISTER_FAILED: &str = "Registration failed";

/// HTTP client for the authentication API
pub struct AuthServiceClient {
    http: HttpClient,
    base_url: String,
}

impl AuthServiceClient {
    /// Create a client rooted at `base_url` (e.g. `http://localhost:8080/api`)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON form and decode the success body.
    ///
    /// Non-success responses become `ApiError::Rejected` carrying the
    /// server's `message`, or `default_error` when there is none.
    async fn submit<B, T>(&self, path: &str, body: &B, default_error: &str) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e, self.base_url()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::from_transport(&e, self.base_url()))?;
        debug!("POST {} -> {}", url, status);

        if status.is_success() {
            let data = serde_json::from_str(&text).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?;
            Ok(data)
        } else {
            let message =
                ErrorBody::message_from(&text).unwrap_or_else(|| default_error.to_string());
            Err(ApiError::Rejected(message).into())
        }
    }
}

#[async_trait]
impl AuthApi for AuthServiceClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.submit("/auth/login", request, LOGIN_FAILED).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.submit("/auth/register", request, REGISTER_FAILED).await
    }
}

#[async_trait]
impl ProfileApi for AuthServiceClient {
    async fn get_profile(&self, token: &str) -> Result<UserProfile> {
        let url = self.url("/users/profile");
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                debug!("transport error: {}", e);
                ApiError::ProfileLoad(format!(
                    "could not reach the server at {}",
                    self.base_url()
                ))
            })?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);
        if !status.is_success() {
            return Err(ApiError::SessionExpired.into());
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::ProfileLoad(e.to_string()))?;
        let profile = serde_json::from_str::<UserProfile>(&text)
            .map_err(|e| ApiError::ProfileLoad(e.to_string()))?;
        Ok(profile)
    }
}
