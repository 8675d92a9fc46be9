//! The transition function that decides what the editor shows.
//!
//! Every trigger re-reads the current fragment and picks exactly one source:
//! a remote reference, an inline token, or the fallback sample. Remote
//! references cannot be resolved synchronously, so [`Reconciler::handle`]
//! hands back a [`ResolveRequest`] and the result comes back through
//! [`Reconciler::complete`], which drops it if the fragment has moved on.

use playshare_conf::CodeLanguage;
use playshare_conf::Settings;
use playshare_project::deserialize;
use playshare_project::expand;
use playshare_project::ProjectConfig;
use playshare_project::ProjectFile;
use playshare_remote::FetchError;
use playshare_remote::RemoteProject;

use crate::collaborators::Collaborators;
use crate::navigation::highlight_sample;
use crate::notice::error_chain;
use crate::notice::SyncError;
use crate::url_state::FragmentParams;
use crate::url_state::UrlShareState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Load,
    FragmentChanged(String),
    LanguageChanged(CodeLanguage),
}

/// Where the files currently in the editor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    RemoteRef,
    InlineToken,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileState {
    Idle,
    Resolving(String),
    Applied(Source),
}

/// A remote reference that has to be resolved before anything is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The remote files were applied.
    Applied,
    /// Resolution failed and the fallback sample was applied.
    Failed,
    /// The fragment no longer points at this reference.
    Discarded,
}

pub struct Reconciler {
    settings: Settings,
    collaborators: Collaborators,
    fragment: String,
    language: CodeLanguage,
    active_remote: Option<RemoteProject>,
    state: ReconcileState,
}

impl Reconciler {
    pub fn new(
        settings: Settings,
        collaborators: Collaborators,
        fragment: impl Into<String>,
    ) -> Self {
        let language = settings.language;
        Self {
            settings,
            collaborators,
            fragment: fragment.into(),
            language,
            active_remote: None,
            state: ReconcileState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ReconcileState {
        &self.state
    }

    /// The remote reference whose files are currently applied, if any.
    #[must_use]
    pub fn active_remote(&self) -> Option<&RemoteProject> {
        self.active_remote.as_ref()
    }

    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    #[must_use]
    pub fn language(&self) -> CodeLanguage {
        self.language
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Reconciles after `trigger`.
    ///
    /// Returns a request when the fragment names a remote reference; the
    /// caller resolves it and passes the outcome to [`Self::complete`].
    pub fn handle(&mut self, trigger: Trigger) -> Option<ResolveRequest> {
        match trigger {
            Trigger::Load => {}
            Trigger::FragmentChanged(fragment) => self.fragment = fragment,
            Trigger::LanguageChanged(language) => self.language = language,
        }

        let params = FragmentParams::parse(&self.fragment);
        let share_state = params.share_state();
        self.invalidate_remote(share_state.remote_id());

        match share_state {
            UrlShareState::RemoteRef(id) => {
                tracing::debug!(id = %id, "resolving remote reference");
                self.state = ReconcileState::Resolving(id.clone());
                Some(ResolveRequest { id })
            }
            UrlShareState::InlineToken(token) => {
                match deserialize(&token) {
                    Ok(files) => {
                        let files = files.into_iter().map(expand).collect();
                        self.apply_files(files, Source::InlineToken);
                    }
                    Err(err) => {
                        self.report(&SyncError::from(err));
                        self.apply_fallback(&params);
                    }
                }
                None
            }
            UrlShareState::None => {
                self.apply_fallback(&params);
                None
            }
        }
    }

    /// Applies the outcome of a resolution unless it has gone stale.
    pub fn complete(
        &mut self,
        request: &ResolveRequest,
        result: Result<RemoteProject, FetchError>,
    ) -> Completion {
        let params = FragmentParams::parse(&self.fragment);
        let current = params.share_state();
        if current.remote_id() != Some(request.id.as_str()) {
            tracing::debug!(
                id = %request.id,
                current = ?current.remote_id(),
                "discarding stale remote resolution"
            );
            return Completion::Discarded;
        }

        match result {
            Ok(project) => {
                self.apply_files(project.files.clone(), Source::RemoteRef);
                self.active_remote = Some(project);
                Completion::Applied
            }
            Err(err) => {
                self.report(&SyncError::from(err));
                self.apply_fallback(&params);
                Completion::Failed
            }
        }
    }

    fn invalidate_remote(&mut self, current_id: Option<&str>) {
        let Some(active) = &self.active_remote else {
            return;
        };
        if current_id != Some(active.id.as_str()) {
            tracing::debug!(id = %active.id, "invalidating active remote reference");
            self.active_remote = None;
        }
    }

    fn apply_files(&mut self, files: Vec<ProjectFile>, source: Source) {
        let collaborators = &self.collaborators;
        collaborators.navigation.clear_active();
        collaborators.language_switch.set_visible(false);
        collaborators.editor.set_config(ProjectConfig::inline(
            self.settings.base_config.as_str(),
            files,
        ));
        self.state = ReconcileState::Applied(source);
    }

    fn apply_fallback(&mut self, params: &FragmentParams) {
        let collaborators = &self.collaborators;
        collaborators.language_switch.set_visible(true);

        let sample = params
            .sample()
            .unwrap_or(self.settings.default_sample.as_str());
        let project_src = self.settings.sample_manifest_path(self.language, sample);
        tracing::debug!(sample, project_src = %project_src, "applying fallback sample");
        collaborators
            .editor
            .set_config(ProjectConfig::sample(project_src));

        collaborators.navigation.clear_active();
        highlight_sample(collaborators.navigation.as_ref(), sample);
        self.state = ReconcileState::Applied(Source::Fallback);
    }

    fn report(&self, err: &SyncError) {
        tracing::error!(error = %error_chain(err), "failed to load shared project");
        self.collaborators.notifier.show(&err.notice());
    }
}

impl std::fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reconciler")
            .field("fragment", &self.fragment)
            .field("language", &self.language)
            .field("active_remote", &self.active_remote.as_ref().map(|p| &p.id))
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
