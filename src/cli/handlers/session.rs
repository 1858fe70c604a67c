//! Login, registration, dashboard and logout flows

use log::debug;

use crate::client::jwt;
use crate::client::models::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
use crate::client::{AuthApi, ProfileApi};
use crate::config::{Config, Session};
use crate::error::{ApiError, Error, Result, ValidationError};

/// Shortest password accepted by the registration form
pub const MIN_PASSWORD_LEN: usize = 6;

/// Result of loading the dashboard
#[derive(Debug)]
pub enum DashboardOutcome {
    /// Profile fetched for the stored token
    Profile(UserProfile),
    /// The server no longer accepts the token; the session was cleared
    SignedOut,
}

/// Client-side checks run before a registration request is sent
pub fn validate_registration(request: &RegisterRequest) -> std::result::Result<(), ValidationError> {
    if request.username.trim().is_empty() {
        return Err(ValidationError::EmptyField("Username"));
    }
    if request.email.trim().is_empty() {
        return Err(ValidationError::EmptyField("Email"));
    }
    // Counted in UTF-16 units, as the browser form does
    if request.password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    Ok(())
}

fn store(config: &mut Config, response: AuthResponse) -> Session {
    let session = Session {
        expires_at: jwt::expires_at(&response.token),
        token: response.token,
        username: response.username,
        email: response.email,
    };
    debug!("Storing session for {}", session.username);
    config.store_session(session.clone());
    session
}

/// Submit the login form and store the returned session.
///
/// On failure the stored session is left untouched.
pub async fn sign_in<C>(client: &C, config: &mut Config, request: &LoginRequest) -> Result<Session>
where
    C: AuthApi + ?Sized,
{
    let response = client.login(request).await?;
    Ok(store(config, response))
}

/// Validate and submit the registration form, storing the returned session.
pub async fn sign_up<C>(
    client: &C,
    config: &mut Config,
    request: &RegisterRequest,
) -> Result<Session>
where
    C: AuthApi + ?Sized,
{
    validate_registration(request)?;
    let response = client.register(request).await?;
    Ok(store(config, response))
}

/// Fetch the profile for the stored token.
///
/// A rejected token clears the session. Transport and parse failures leave
/// it in place so the user can retry.
pub async fn load_dashboard<C>(client: &C, config: &mut Config) -> Result<DashboardOutcome>
where
    C: ProfileApi + ?Sized,
{
    let token = config.require_session()?.token.clone();

    match client.get_profile(&token).await {
        Ok(profile) => Ok(DashboardOutcome::Profile(profile)),
        Err(Error::Api(ApiError::SessionExpired)) => {
            debug!("Token rejected, clearing session");
            sign_out(config);
            Ok(DashboardOutcome::SignedOut)
        }
        Err(e) => Err(e),
    }
}

/// Forget the stored session. Returns whether one was present.
pub fn sign_out(config: &mut Config) -> bool {
    config.clear_session()
}
