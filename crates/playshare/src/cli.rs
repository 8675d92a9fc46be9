use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::args::Args;
use crate::commands::Command;
use crate::commands::PlayshareCommand;

/// Share playground projects as links and open them again.
#[derive(Parser)]
#[command(name = "playshare")]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: PlayshareCommand,

    #[command(flatten)]
    pub args: Args,
}

/// Parse CLI arguments and execute the chosen command
pub async fn run(args: Vec<String>) -> Result<ExitCode> {
    let cli = Cli::try_parse_from(args).unwrap_or_else(|e| {
        e.exit();
    });

    crate::logging::init(&cli.args.global);

    cli.command.execute(&cli.args).await
}
