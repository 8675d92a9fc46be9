mod decode;
mod open;
mod share;

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::args::Args;

pub trait Command {
    async fn execute(&self, args: &Args) -> Result<ExitCode>;
}

#[derive(Debug, Subcommand)]
pub enum PlayshareCommand {
    /// Encode files into a share link
    Share(self::share::Share),
    /// Resolve a playground URL to the project config it loads
    Open(self::open::Open),
    /// Print the files inside a `project` token
    Decode(self::decode::Decode),
}

impl Command for PlayshareCommand {
    async fn execute(&self, args: &Args) -> Result<ExitCode> {
        match self {
            Self::Share(cmd) => cmd.execute(args).await,
            Self::Open(cmd) => cmd.execute(args).await,
            Self::Decode(cmd) => cmd.execute(args).await,
        }
    }
}
