//! authdesk CLI - sign in to a JWT authentication service and view your profile

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Log to stderr; `--debug` turns on debug output for this crate only
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Login(args) => cli::login::run(args, &opts).await,
        Commands::Register(args) => cli::register::run(args, &opts).await,
        Commands::Profile => cli::profile::run(&opts).await,
        Commands::Logout => cli::logout::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("authdesk version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
