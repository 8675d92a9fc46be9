use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use playshare_conf::Settings;
use playshare_project::ProjectConfig;
use playshare_project::ProjectFile;

use crate::collaborators::Clipboard;
use crate::collaborators::Collaborators;
use crate::collaborators::EditorModel;
use crate::collaborators::LanguageSwitch;
use crate::collaborators::Navigation;
use crate::collaborators::Notifier;
use crate::navigation::EntryGeometry;
use crate::notice::Notice;
use crate::reconciler::Reconciler;

#[derive(Default)]
pub(crate) struct RecordingEditor {
    configs: Mutex<Vec<ProjectConfig>>,
    files: Mutex<Vec<ProjectFile>>,
}

impl RecordingEditor {
    pub(crate) fn configs(&self) -> Vec<ProjectConfig> {
        self.configs.lock().unwrap().clone()
    }

    pub(crate) fn last_config(&self) -> Option<serde_json::Value> {
        self.configs
            .lock()
            .unwrap()
            .last()
            .map(|config| serde_json::to_value(config).unwrap())
    }

    pub(crate) fn set_files(&self, files: Vec<ProjectFile>) {
        *self.files.lock().unwrap() = files;
    }
}

impl EditorModel for RecordingEditor {
    fn set_config(&self, config: ProjectConfig) {
        self.configs.lock().unwrap().push(config);
    }

    fn files(&self) -> Vec<ProjectFile> {
        self.files.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    shown: Mutex<Vec<Notice>>,
    confirmed: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub(crate) fn shown(&self) -> Vec<Notice> {
        self.shown.lock().unwrap().clone()
    }

    pub(crate) fn confirmed(&self) -> Vec<String> {
        self.confirmed.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, notice: &Notice) {
        self.shown.lock().unwrap().push(notice.clone());
    }

    fn confirm(&self, message: &str) {
        self.confirmed.lock().unwrap().push(message.to_string());
    }
}

/// Records calls as `clear`, `activate:<sample>` and `scroll:<top>`.
#[derive(Default)]
pub(crate) struct RecordingNavigation {
    entries: Mutex<HashMap<String, EntryGeometry>>,
    events: Mutex<Vec<String>>,
}

impl RecordingNavigation {
    pub(crate) fn add_entry(&self, sample: &str, geometry: EntryGeometry) {
        self.entries
            .lock()
            .unwrap()
            .insert(sample.to_string(), geometry);
    }

    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl Navigation for RecordingNavigation {
    fn clear_active(&self) {
        self.events.lock().unwrap().push("clear".to_string());
    }

    fn activate(&self, sample: &str) -> Option<EntryGeometry> {
        self.events.lock().unwrap().push(format!("activate:{sample}"));
        self.entries.lock().unwrap().get(sample).copied()
    }

    fn scroll_container(&self, top: f64) {
        self.events.lock().unwrap().push(format!("scroll:{top}"));
    }
}

#[derive(Default)]
pub(crate) struct RecordingSwitch {
    visible: Mutex<Vec<bool>>,
}

impl RecordingSwitch {
    pub(crate) fn last(&self) -> Option<bool> {
        self.visible.lock().unwrap().last().copied()
    }
}

impl LanguageSwitch for RecordingSwitch {
    fn set_visible(&self, visible: bool) {
        self.visible.lock().unwrap().push(visible);
    }
}

#[derive(Default)]
pub(crate) struct RecordingClipboard {
    texts: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub(crate) fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) {
        self.texts.lock().unwrap().push(text.to_string());
    }
}

/// One of each recording collaborator, wired together.
#[derive(Default)]
pub(crate) struct Harness {
    pub(crate) editor: Arc<RecordingEditor>,
    pub(crate) notifier: Arc<RecordingNotifier>,
    pub(crate) navigation: Arc<RecordingNavigation>,
    pub(crate) switch: Arc<RecordingSwitch>,
    pub(crate) clipboard: Arc<RecordingClipboard>,
}

impl Harness {
    pub(crate) fn collaborators(&self) -> Collaborators {
        Collaborators::builder(self.editor.clone())
            .notifier(self.notifier.clone())
            .navigation(self.navigation.clone())
            .language_switch(self.switch.clone())
            .clipboard(self.clipboard.clone())
            .build()
    }

    pub(crate) fn reconciler(&self, fragment: &str) -> Reconciler {
        Reconciler::new(Settings::default(), self.collaborators(), fragment)
    }
}
