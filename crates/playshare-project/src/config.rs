use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::file::ProjectFile;

/// Per-file entry of an inline [`ProjectConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    pub content: String,
    #[serde(default)]
    pub hidden: bool,
}

/// What the editor is told to load.
///
/// Serializes to exactly one of `{"extends": .., "files": {..}}` or
/// `{"projectSrc": ..}`. A new config always replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectConfig {
    Inline {
        extends: String,
        files: IndexMap<String, FileConfig>,
    },
    Sample {
        #[serde(rename = "projectSrc")]
        project_src: String,
    },
}

impl ProjectConfig {
    /// Builds an inline config on top of `base`.
    ///
    /// A repeated name keeps its first position and takes the last content.
    #[must_use]
    pub fn inline<I>(base: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = ProjectFile>,
    {
        let mut map = IndexMap::new();
        for file in files {
            let entry = FileConfig {
                content: file.content,
                hidden: file.hidden,
            };
            if map.insert(file.name.clone(), entry).is_some() {
                tracing::warn!(name = %file.name, "duplicate file name in project, keeping last");
            }
        }
        Self::Inline {
            extends: base.into(),
            files: map,
        }
    }

    #[must_use]
    pub fn sample(project_src: impl Into<String>) -> Self {
        Self::Sample {
            project_src: project_src.into(),
        }
    }
}
