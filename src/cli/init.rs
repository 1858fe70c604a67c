//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Stores the API base URL. With `--api-url` (or `AUTHDESK_API_URL`) the value
/// is taken as given; otherwise the user is prompted with the current value
/// as the default.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to authdesk!".bold().green());

    let mut config = Config::load_at(opts.config_ref())?;

    let api_url = match opts.api_url_ref() {
        Some(url) => url.to_string(),
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Authentication API base URL")
            .default(config.resolve_api_url(None))
            .interact_text()?,
    };
    let api_url = api_url.trim().trim_end_matches('/').to_string();

    // Sessions are bound to the API that issued them
    if config.resolve_api_url(None) != api_url && config.clear_session() {
        println!("{} Cleared session for the previous API", "→".cyan());
    }
    config.api_url = Some(api_url);
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Sign in", "authdesk login".cyan());
    println!("  {} - Create an account", "authdesk register".cyan());

    Ok(())
}
