use std::process::ExitCode;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use playshare_project::deserialize;
use playshare_project::expand;
use playshare_project::ProjectFile;

use crate::args::Args;
use crate::commands::Command;

#[derive(Debug, Parser)]
pub struct Decode {
    /// The value of a link's `project` parameter.
    token: String,
}

impl Command for Decode {
    async fn execute(&self, _args: &Args) -> Result<ExitCode> {
        let files: Vec<ProjectFile> = deserialize(self.token.trim())
            .context("Failed to decode project token")?
            .into_iter()
            .map(expand)
            .collect();

        println!("{}", serde_json::to_string_pretty(&files)?);
        Ok(ExitCode::SUCCESS)
    }
}
