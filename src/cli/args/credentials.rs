//! Form field arguments for the sign-in commands
//!
//! Any field left out on the command line is prompted for interactively.

use clap::Args;

/// Fields of the login form
#[derive(Args, Debug, Default, Clone)]
pub struct LoginArgs {
    /// Username (prompted if omitted)
    #[arg(long, short = 'u')]
    pub username: Option<String>,

    /// Password (prompted without echo if omitted)
    #[arg(long, env = "AUTHDESK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Sign in again even if a session is already stored
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Fields of the registration form
#[derive(Args, Debug, Default, Clone)]
pub struct RegisterArgs {
    /// Username (prompted if omitted)
    #[arg(long, short = 'u')]
    pub username: Option<String>,

    /// Email address (prompted if omitted)
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// Password, at least 6 characters (prompted without echo if omitted)
    #[arg(long, env = "AUTHDESK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Register even if a session is already stored
    #[arg(long, short = 'f')]
    pub force: bool,
}
