//! Register command implementation

use colored::Colorize;

use crate::cli::args::{GlobalOptions, RegisterArgs};
use crate::cli::handlers::{sign_up, validate_registration};
use crate::cli::loading::Loading;
use crate::cli::prompt::{password_or_prompt, text_or_prompt};
use crate::cli::{CommandContext, profile};
use crate::client::models::RegisterRequest;
use crate::error::Result;

/// Run the register command
pub async fn run(args: RegisterArgs, opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;

    if !args.force {
        if let Some(session) = &ctx.config.session {
            eprintln!(
                "{} Already signed in as {}. Use --force to register anyway.",
                "→".cyan(),
                session.username.bold()
            );
            return profile::show(&mut ctx).await;
        }
    }

    let request = RegisterRequest {
        username: text_or_prompt(args.username, "Username")?,
        email: text_or_prompt(args.email, "Email")?,
        password: password_or_prompt(args.password, "Password")?,
    };

    // Fail before the spinner starts
    validate_registration(&request)?;

    let session = {
        let _loading = Loading::start("Creating account...");
        sign_up(&ctx.client, &mut ctx.config, &request).await?
    };
    ctx.bind_session_to_api();
    ctx.save()?;

    eprintln!(
        "{} Account created. Signed in as {}",
        "✓".green(),
        session.username.bold()
    );
    profile::show(&mut ctx).await
}
