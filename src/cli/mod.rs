//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod context;
pub mod handlers;
pub mod init;
pub mod loading;
pub mod login;
pub mod logout;
pub mod profile;
pub mod prompt;
pub mod register;
pub mod status;

pub use args::{GlobalOptions, LoginArgs, OutputFormat, RegisterArgs};
pub use context::CommandContext;

/// authdesk - sign in to a JWT authentication service and view your profile
#[derive(Parser, Debug)]
#[command(name = "authdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "AUTHDESK_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "AUTHDESK_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL (default http://localhost:8080/api)
    #[arg(long, global = true, env = "AUTHDESK_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "AUTHDESK_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure the API location
    Init,

    /// Sign in with username and password
    #[command(after_help = "EXAMPLES:\n  \
            authdesk login                              # Prompt for credentials\n  \
            authdesk login -u alice                     # Prompt for password only\n  \
            AUTHDESK_PASSWORD=... authdesk login -u alice  # Non-interactive")]
    Login(LoginArgs),

    /// Create an account and sign in
    #[command(after_help = "EXAMPLES:\n  \
            authdesk register\n  \
            authdesk register -u alice -e alice@example.com")]
    Register(RegisterArgs),

    /// Show the signed-in user's profile
    #[command(visible_alias = "dashboard")]
    Profile,

    /// Forget the stored session
    Logout,

    /// Show configuration and session status
    Status,

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   authdesk completion bash > /etc/bash_completion.d/authdesk
  zsh:    authdesk completion zsh > \"${fpath[1]}/_authdesk\"
  fish:   authdesk completion fish > ~/.config/fish/completions/authdesk.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
