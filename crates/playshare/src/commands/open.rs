use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use playshare_conf::CodeLanguage;
use playshare_remote::HttpFetcher;
use playshare_remote::RemoteResolver;
use playshare_sync::Collaborators;
use playshare_sync::Reconciler;
use url::Url;

use crate::args::Args;
use crate::commands::Command;
use crate::terminal::Session;
use crate::terminal::StderrNotifier;
use crate::terminal::StdoutClipboard;

#[derive(Debug, Parser)]
pub struct Open {
    /// Playground URL whose fragment should be loaded.
    url: Url,

    /// Sample language variant. Defaults to the configured language.
    #[arg(long, value_name = "LANG")]
    lang: Option<CodeLanguage>,
}

impl Command for Open {
    async fn execute(&self, args: &Args) -> Result<ExitCode> {
        let mut settings = args.global.settings()?;
        if let Some(lang) = self.lang {
            settings.language = lang;
        }

        let fetcher = HttpFetcher::new().context("Failed to build HTTP client")?;
        let resolver = RemoteResolver::new(Arc::new(fetcher), settings.api_base_url.clone());

        let session = Arc::new(Session::default());
        let collaborators = Collaborators::builder(session.clone())
            .notifier(Arc::new(StderrNotifier))
            .navigation(session.clone())
            .language_switch(session.clone())
            .clipboard(Arc::new(StdoutClipboard))
            .build();

        let fragment = self.url.fragment().unwrap_or_default();
        let reconciler = Reconciler::new(settings, collaborators, fragment);

        let (handle, task) = playshare_sync::spawn(reconciler, resolver);
        handle.load()?;
        drop(handle);
        let reconciler = task.await.context("Sync loop panicked")?;

        tracing::info!(
            state = ?reconciler.state(),
            highlighted = ?session.highlighted(),
            language_switch = session.language_switch_visible(),
            "reconciled"
        );

        let config = session
            .config()
            .context("No project config was applied")?;
        println!("{}", serde_json::to_string_pretty(&config)?);

        Ok(ExitCode::SUCCESS)
    }
}
