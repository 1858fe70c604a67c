//! Authentication service API client

pub mod api;
pub mod auth_service;
pub mod jwt;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{AuthApi, ProfileApi};
pub use auth_service::AuthServiceClient;
#[cfg(test)]
pub use mock::MockAuthClient;
