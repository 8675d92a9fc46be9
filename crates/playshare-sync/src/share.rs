use playshare_project::serialize;
use playshare_project::EncodeError;
use playshare_project::ProjectFile;
use url::Url;

use crate::collaborators::Collaborators;
use crate::url_state::PROJECT_PARAM;

pub const LINK_COPIED: &str = "Link copied to clipboard";

/// `location` with its whole fragment replaced by `project=<token>`.
pub fn build_share_link(location: &Url, files: &[ProjectFile]) -> Result<Url, EncodeError> {
    let token = serialize(files)?;
    let mut link = location.clone();
    link.set_fragment(Some(&format!("{PROJECT_PARAM}={token}")));
    Ok(link)
}

/// The share action: editor files in, link on the clipboard.
#[derive(Clone)]
pub struct Sharer {
    collaborators: Collaborators,
}

impl Sharer {
    #[must_use]
    pub fn new(collaborators: Collaborators) -> Self {
        Self { collaborators }
    }

    pub fn share(&self, location: &Url) -> Result<Url, EncodeError> {
        let files = self.collaborators.editor.files();
        let link = build_share_link(location, &files)?;
        tracing::debug!(files = files.len(), "built share link");
        self.collaborators.clipboard.write_text(link.as_str());
        self.collaborators.notifier.confirm(LINK_COPIED);
        Ok(link)
    }
}
