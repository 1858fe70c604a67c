//! Login command implementation

use colored::Colorize;

use crate::cli::args::{GlobalOptions, LoginArgs};
use crate::cli::handlers::sign_in;
use crate::cli::loading::Loading;
use crate::cli::prompt::{password_or_prompt, text_or_prompt};
use crate::cli::{CommandContext, profile};
use crate::client::models::LoginRequest;
use crate::error::Result;

/// Run the login command
pub async fn run(args: LoginArgs, opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;

    if !args.force {
        if let Some(session) = &ctx.config.session {
            eprintln!(
                "{} Already signed in as {}. Use --force to sign in again.",
                "→".cyan(),
                session.username.bold()
            );
            return profile::show(&mut ctx).await;
        }
    }

    let request = LoginRequest {
        username: text_or_prompt(args.username, "Username")?,
        password: password_or_prompt(args.password, "Password")?,
    };

    let session = {
        let _loading = Loading::start("Signing in...");
        sign_in(&ctx.client, &mut ctx.config, &request).await?
    };
    ctx.bind_session_to_api();
    ctx.save()?;

    eprintln!("{} Signed in as {}", "✓".green(), session.username.bold());
    profile::show(&mut ctx).await
}
