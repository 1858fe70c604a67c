//! Dashboard command: fetch and render the signed-in user's profile

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{DashboardOutcome, load_dashboard};
use crate::cli::loading::Loading;
use crate::error::{ApiError, Result};
use crate::output;

/// Run the profile command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    show(&mut ctx).await
}

/// Load and print the dashboard for the stored session.
///
/// A rejected token signs the user out before the error is reported.
pub async fn show(ctx: &mut CommandContext) -> Result<()> {
    let outcome = {
        let _loading = Loading::start("Loading profile...");
        load_dashboard(&ctx.client, &mut ctx.config).await?
    };

    match outcome {
        DashboardOutcome::Profile(profile) => output::print(&profile, ctx.format),
        DashboardOutcome::SignedOut => {
            ctx.save()?;
            Err(ApiError::SessionExpired.into())
        }
    }
}
