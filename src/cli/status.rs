//! Status command implementation

use chrono::Utc;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::output::formatters::format_remaining;
use crate::output::json::format_json;

/// Run the status command to display configuration and session status.
///
/// Reads local state only; the server is not contacted.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let config_path = Config::resolve_path(opts.config_ref())?;
    let config_exists = config_path.exists();
    let config = Config::load_at(opts.config_ref())?;
    let api_url = config.resolve_api_url(opts.api_url_ref());

    if opts.resolve_format(&config) == OutputFormat::Json {
        let session = config.session.as_ref();
        let output = serde_json::json!({
            "config_path": config_path.display().to_string(),
            "config_exists": config_exists,
            "api_url": api_url,
            "signed_in": config.token().is_some(),
            "username": session.map(|s| &s.username),
            "email": session.map(|s| &s.email),
            "token_expires_at": session.and_then(|s| s.expires_at).map(|t| t.to_rfc3339()),
            "token_expired": session.map(|s| s.is_expired()),
        });
        println!("{}", format_json(&output)?);
        return Ok(());
    }

    println!("{}\n", "authdesk Status".bold());

    if config_exists {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created yet)".dimmed()
        );
    }
    println!("API URL: {}", api_url.cyan());
    println!();

    match &config.session {
        Some(session) => {
            println!(
                "{} Signed in as {} <{}>",
                "✓".green(),
                session.username.bold(),
                session.email
            );

            match session.expires_at {
                Some(_) if session.is_expired() => {
                    println!("{} Token expired", "⚠".yellow());
                    println!("  → Run 'authdesk login --force' to sign in again");
                }
                Some(expires_at) => {
                    let remaining = expires_at.signed_duration_since(Utc::now());
                    println!(
                        "{} Token valid (expires in {})",
                        "✓".green(),
                        format_remaining(remaining)
                    );
                }
                None => {
                    println!(
                        "{} Token expiry unknown (checked by the server on next use)",
                        "○".dimmed()
                    );
                }
            }
        }
        None => {
            println!("{} Not signed in", "✗".red());
            println!("  → Run 'authdesk login' or 'authdesk register'");
        }
    }

    println!();
    Ok(())
}
