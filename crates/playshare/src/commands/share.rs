use std::collections::HashSet;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use playshare_project::ProjectFile;
use playshare_sync::Collaborators;
use playshare_sync::Sharer;
use url::Url;

use crate::args::Args;
use crate::commands::Command;
use crate::terminal::Session;
use crate::terminal::StderrNotifier;
use crate::terminal::StdoutClipboard;

const DEFAULT_BASE_URL: &str = "https://lit.dev/playground/";

#[derive(Debug, Parser)]
pub struct Share {
    /// Files to include, in display order. Each is named after its file name.
    #[arg(required = true)]
    files: Vec<Utf8PathBuf>,

    /// Mark the file with this name as hidden. May be repeated.
    #[arg(long, value_name = "NAME")]
    hidden: Vec<String>,

    /// Page the link should open.
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: Url,
}

impl Command for Share {
    async fn execute(&self, _args: &Args) -> Result<ExitCode> {
        let files = read_files(&self.files, &self.hidden)?;

        let session = Arc::new(Session::with_files(files));
        let collaborators = Collaborators::builder(session.clone())
            .notifier(Arc::new(StderrNotifier))
            .navigation(session.clone())
            .language_switch(session)
            .clipboard(Arc::new(StdoutClipboard))
            .build();

        Sharer::new(collaborators)
            .share(&self.base_url)
            .context("Failed to build share link")?;

        Ok(ExitCode::SUCCESS)
    }
}

fn read_files(paths: &[Utf8PathBuf], hidden: &[String]) -> Result<Vec<ProjectFile>> {
    let mut seen = HashSet::new();
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        let name = path
            .file_name()
            .with_context(|| format!("{path} has no file name"))?;
        if !seen.insert(name.to_string()) {
            anyhow::bail!("More than one file is named {name}");
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
        let is_hidden = hidden.iter().any(|h| h == name);
        files.push(ProjectFile::new(name, content).hidden(is_hidden));
    }

    if let Some(unknown) = hidden.iter().find(|h| !seen.contains(h.as_str())) {
        anyhow::bail!("--hidden {unknown} does not name any of the given files");
    }

    Ok(files)
}
