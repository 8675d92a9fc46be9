use anyhow::Context;
use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use playshare_conf::Settings;

#[derive(Parser)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct GlobalArgs {
    /// Do not print any log output.
    #[arg(global = true, long, short, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Use verbose output.
    #[arg(global = true, action = clap::ArgAction::Count, long, short, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Directory searched for `playshare.toml` and `.playshare.toml`.
    /// Defaults to the current directory.
    #[arg(global = true, long, value_name = "DIR")]
    pub project_dir: Option<Utf8PathBuf>,
}

impl GlobalArgs {
    pub fn project_dir(&self) -> Result<Utf8PathBuf> {
        if let Some(dir) = &self.project_dir {
            return Ok(dir.clone());
        }
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Utf8PathBuf::from_path_buf(cwd)
            .map_err(|_| anyhow::anyhow!("Current directory is not valid UTF-8"))
    }

    pub fn settings(&self) -> Result<Settings> {
        let project_dir = self.project_dir()?;
        Settings::new(project_dir.as_std_path()).context("Failed to load settings")
    }
}
