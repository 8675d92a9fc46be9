//! Collaborators for running the engine from a terminal.
//!
//! Standard output stands in for the clipboard and standard error for the
//! notification area. [`Session`] plays the editor, the sample list and the
//! language toggle at once, remembering what it was told.

use std::sync::Mutex;
use std::sync::PoisonError;

use playshare_project::ProjectConfig;
use playshare_project::ProjectFile;
use playshare_sync::Clipboard;
use playshare_sync::EditorModel;
use playshare_sync::EntryGeometry;
use playshare_sync::LanguageSwitch;
use playshare_sync::Navigation;
use playshare_sync::Notice;
use playshare_sync::Notifier;

pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn show(&self, notice: &Notice) {
        eprintln!("{}: {}", notice.heading, notice.message);
    }

    fn confirm(&self, message: &str) {
        eprintln!("{message}");
    }
}

pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&self, text: &str) {
        println!("{text}");
    }
}

#[derive(Default)]
pub struct Session {
    files: Vec<ProjectFile>,
    config: Mutex<Option<ProjectConfig>>,
    highlighted: Mutex<Option<String>>,
    language_switch_visible: Mutex<bool>,
}

impl Session {
    pub fn with_files(files: Vec<ProjectFile>) -> Self {
        Self {
            files,
            ..Self::default()
        }
    }

    pub fn config(&self) -> Option<ProjectConfig> {
        self.config
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn highlighted(&self) -> Option<String> {
        self.highlighted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn language_switch_visible(&self) -> bool {
        *self
            .language_switch_visible
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl EditorModel for Session {
    fn set_config(&self, config: ProjectConfig) {
        *self.config.lock().unwrap_or_else(PoisonError::into_inner) = Some(config);
    }

    fn files(&self) -> Vec<ProjectFile> {
        self.files.clone()
    }
}

impl Navigation for Session {
    fn clear_active(&self) {
        *self
            .highlighted
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn activate(&self, sample: &str) -> Option<EntryGeometry> {
        *self
            .highlighted
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(sample.to_string());
        None
    }

    fn scroll_container(&self, _top: f64) {}
}

impl LanguageSwitch for Session {
    fn set_visible(&self, visible: bool) {
        *self
            .language_switch_visible
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_remembers_last_config() {
        let session = Session::default();
        session.set_config(ProjectConfig::sample("/samples/a/project.json"));
        session.set_config(ProjectConfig::sample("/samples/b/project.json"));
        assert_eq!(
            session.config(),
            Some(ProjectConfig::sample("/samples/b/project.json"))
        );
    }

    #[test]
    fn test_session_tracks_highlight() {
        let session = Session::default();
        assert_eq!(session.activate("examples/clock"), None);
        assert_eq!(session.highlighted().as_deref(), Some("examples/clock"));
        session.clear_active();
        assert_eq!(session.highlighted(), None);
    }
}
