//! Mapping remote collections onto project files.
//!
//! A collection may carry a `playground.json` entry describing display order
//! and hidden flags:
//!
//! ```json
//! {"files": {"index.html": {}, "package.json": {"hidden": true}}}
//! ```
//!
//! Files the manifest lists come first, in manifest order. Everything else
//! follows in name order. The manifest itself never becomes a project file.

use indexmap::IndexMap;
use playshare_project::ProjectFile;
use serde::Deserialize;

use crate::fetch::RemoteCollection;

pub const MANIFEST_NAME: &str = "playground.json";

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    files: IndexMap<String, ManifestEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct ManifestEntry {
    #[serde(default)]
    hidden: bool,
}

fn read_manifest(collection: &RemoteCollection) -> Manifest {
    let Some(content) = collection
        .files
        .get(MANIFEST_NAME)
        .and_then(|file| file.content.as_deref())
    else {
        return Manifest::default();
    };

    match serde_json::from_str(content) {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::warn!(id = %collection.id, error = %e, "ignoring unreadable {MANIFEST_NAME}");
            Manifest::default()
        }
    }
}

fn project_file(collection: &RemoteCollection, name: &str, hidden: bool) -> Option<ProjectFile> {
    let file = collection.files.get(name)?;
    let content = file.content.clone().unwrap_or_else(|| {
        tracing::warn!(id = %collection.id, name, "remote file has no content");
        String::new()
    });
    Some(ProjectFile::new(name, content).hidden(hidden))
}

#[must_use]
pub fn collection_to_files(collection: &RemoteCollection) -> Vec<ProjectFile> {
    let manifest = read_manifest(collection);
    let mut files = Vec::with_capacity(collection.files.len());

    for (name, entry) in &manifest.files {
        if name == MANIFEST_NAME {
            continue;
        }
        match project_file(collection, name, entry.hidden) {
            Some(file) => files.push(file),
            None => {
                tracing::debug!(id = %collection.id, name = %name, "manifest lists a missing file");
            }
        }
    }

    for name in collection.files.keys() {
        if name == MANIFEST_NAME || manifest.files.contains_key(name) {
            continue;
        }
        if let Some(file) = project_file(collection, name, false) {
            files.push(file);
        }
    }

    files
}
