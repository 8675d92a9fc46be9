//! Handles to everything outside the engine.
//!
//! The editor is required. The notification sink, navigation list, language
//! switch and clipboard are optional: whatever is missing is reported once
//! when [`CollaboratorsBuilder::build`] runs and replaced by [`Detached`].

use std::sync::Arc;

use playshare_project::ProjectConfig;
use playshare_project::ProjectFile;

use crate::navigation::EntryGeometry;
use crate::notice::Notice;

/// The code editor's project model.
pub trait EditorModel: Send + Sync {
    /// Replaces the whole project configuration.
    fn set_config(&self, config: ProjectConfig);
    /// Current files in display order.
    fn files(&self) -> Vec<ProjectFile>;
}

pub trait Notifier: Send + Sync {
    /// Surfaces an error to the user.
    fn show(&self, notice: &Notice);
    /// Surfaces a short-lived confirmation.
    fn confirm(&self, message: &str);
}

/// The list of built-in samples next to the editor.
pub trait Navigation: Send + Sync {
    fn clear_active(&self);
    /// Marks the entry for `sample` active and reports where it sits, or
    /// `None` when there is no such entry.
    fn activate(&self, sample: &str) -> Option<EntryGeometry>;
    /// Scrolls the list container to `top` without moving input focus.
    fn scroll_container(&self, top: f64);
}

/// The TypeScript/JavaScript toggle.
pub trait LanguageSwitch: Send + Sync {
    fn set_visible(&self, visible: bool);
}

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str);
}

/// Stand-in for a collaborator that is not present.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detached;

impl Notifier for Detached {
    fn show(&self, notice: &Notice) {
        tracing::warn!(heading = %notice.heading, message = %notice.message, "notice dropped");
    }

    fn confirm(&self, _message: &str) {}
}

impl Navigation for Detached {
    fn clear_active(&self) {}

    fn activate(&self, _sample: &str) -> Option<EntryGeometry> {
        None
    }

    fn scroll_container(&self, _top: f64) {}
}

impl LanguageSwitch for Detached {
    fn set_visible(&self, _visible: bool) {}
}

impl Clipboard for Detached {
    fn write_text(&self, _text: &str) {}
}

#[derive(Clone)]
pub struct Collaborators {
    pub editor: Arc<dyn EditorModel>,
    pub notifier: Arc<dyn Notifier>,
    pub navigation: Arc<dyn Navigation>,
    pub language_switch: Arc<dyn LanguageSwitch>,
    pub clipboard: Arc<dyn Clipboard>,
}

impl Collaborators {
    pub fn builder(editor: Arc<dyn EditorModel>) -> CollaboratorsBuilder {
        CollaboratorsBuilder {
            editor,
            notifier: None,
            navigation: None,
            language_switch: None,
            clipboard: None,
        }
    }
}

pub struct CollaboratorsBuilder {
    editor: Arc<dyn EditorModel>,
    notifier: Option<Arc<dyn Notifier>>,
    navigation: Option<Arc<dyn Navigation>>,
    language_switch: Option<Arc<dyn LanguageSwitch>>,
    clipboard: Option<Arc<dyn Clipboard>>,
}

impl CollaboratorsBuilder {
    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub fn navigation(mut self, navigation: Arc<dyn Navigation>) -> Self {
        self.navigation = Some(navigation);
        self
    }

    #[must_use]
    pub fn language_switch(mut self, language_switch: Arc<dyn LanguageSwitch>) -> Self {
        self.language_switch = Some(language_switch);
        self
    }

    #[must_use]
    pub fn clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    #[must_use]
    pub fn build(self) -> Collaborators {
        Collaborators {
            editor: self.editor,
            notifier: self.notifier.unwrap_or_else(|| missing("notifier")),
            navigation: self.navigation.unwrap_or_else(|| missing("navigation")),
            language_switch: self
                .language_switch
                .unwrap_or_else(|| missing("language switch")),
            clipboard: self.clipboard.unwrap_or_else(|| missing("clipboard")),
        }
    }
}

fn missing(name: &str) -> Arc<Detached> {
    tracing::error!("missing {name} collaborator, running without it");
    Arc::new(Detached)
}
