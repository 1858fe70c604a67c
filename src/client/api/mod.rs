//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - login and registration
//! - [`ProfileApi`] - token-authenticated profile access

mod auth;
mod profile;

pub use auth::AuthApi;
pub use profile::ProfileApi;
