//! Shell completion generation

use clap::CommandFactory;

use crate::cli::{Cli, Shell};

/// Write a static completion script for `shell` to stdout
pub fn run(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
