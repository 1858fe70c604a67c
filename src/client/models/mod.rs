//! Authentication API data models

mod auth;
mod user;

pub use auth::{AuthResponse, ErrorBody, LoginRequest, RegisterRequest};
pub use user::UserProfile;
