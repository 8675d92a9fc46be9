use serde::Deserialize;
use serde::Serialize;

/// A named source file as the editor holds it.
///
/// Names are path-like (`src/index.ts`) and unique within a project. The
/// position of a file in its project is its display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub hidden: bool,
}

impl ProjectFile {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            hidden: false,
        }
    }

    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// The on-the-wire form of a [`ProjectFile`].
///
/// `hidden` is only written when it is set, which keeps share links short for
/// the common case of fully visible projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactProjectFile {
    pub name: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

#[must_use]
pub fn compact(file: &ProjectFile) -> CompactProjectFile {
    CompactProjectFile {
        name: file.name.clone(),
        content: file.content.clone(),
        hidden: file.hidden.then_some(true),
    }
}

#[must_use]
pub fn expand(file: CompactProjectFile) -> ProjectFile {
    ProjectFile {
        name: file.name,
        content: file.content,
        hidden: file.hidden.unwrap_or(false),
    }
}

impl From<CompactProjectFile> for ProjectFile {
    fn from(file: CompactProjectFile) -> Self {
        expand(file)
    }
}

impl From<&ProjectFile> for CompactProjectFile {
    fn from(file: &ProjectFile) -> Self {
        compact(file)
    }
}
