mod collaborators;
mod dispatch;
mod navigation;
mod notice;
mod reconciler;
mod share;
#[cfg(test)]
mod testing;
mod url_state;

pub use collaborators::Clipboard;
pub use collaborators::Collaborators;
pub use collaborators::CollaboratorsBuilder;
pub use collaborators::Detached;
pub use collaborators::EditorModel;
pub use collaborators::LanguageSwitch;
pub use collaborators::Navigation;
pub use collaborators::Notifier;
pub use dispatch::spawn;
pub use dispatch::SyncClosed;
pub use dispatch::SyncHandle;
pub use navigation::centered_scroll_top;
pub use navigation::EntryGeometry;
pub use navigation::Rect;
pub use notice::Notice;
pub use notice::SyncError;
pub use reconciler::Completion;
pub use reconciler::ReconcileState;
pub use reconciler::Reconciler;
pub use reconciler::ResolveRequest;
pub use reconciler::Source;
pub use reconciler::Trigger;
pub use share::build_share_link;
pub use share::Sharer;
pub use share::LINK_COPIED;
pub use url_state::is_valid_sample;
pub use url_state::FragmentParams;
pub use url_state::UrlShareState;
