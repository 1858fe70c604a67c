//! Logout command implementation

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::sign_out;
use crate::error::Result;

/// Run the logout command
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;

    if sign_out(&mut ctx.config) {
        ctx.save()?;
        println!("{} Signed out", "✓".green());
    } else {
        println!("{} Not signed in", "○".dimmed());
    }

    Ok(())
}
