use std::error::Error as StdError;
use std::fmt::Write as _;

use playshare_project::ProjectTokenError;
use playshare_remote::FetchError;
use thiserror::Error;

/// A user-facing error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub heading: String,
    pub message: String,
}

impl Notice {
    pub fn new(heading: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn reference_not_found() -> Self {
        Self::new(
            "Reference not found",
            "The given remote reference could not be found.",
        )
    }

    #[must_use]
    pub fn generic() -> Self {
        Self::new(
            "Could not load project",
            "The shared project could not be loaded. Showing the default sample instead.",
        )
    }
}

/// Everything that can go wrong while loading shared state.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("inline project could not be loaded")]
    Token(#[from] ProjectTokenError),
    #[error(transparent)]
    Remote(#[from] FetchError),
}

impl SyncError {
    /// Only a missing remote reference gets its own wording.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::Remote(err) if err.is_not_found() => Notice::reference_not_found(),
            Self::Token(_) | Self::Remote(_) => Notice::generic(),
        }
    }
}

/// Renders an error and its sources as `outer: inner: innermost`.
pub(crate) fn error_chain(err: &dyn StdError) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(out, ": {cause}");
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use playshare_project::deserialize;

    use super::*;

    #[test]
    fn test_not_found_gets_specific_notice() {
        let err = SyncError::from(FetchError::NotFound { id: "abc".into() });
        assert_eq!(err.notice(), Notice::reference_not_found());
    }

    #[test]
    fn test_transport_gets_generic_notice() {
        let err = SyncError::from(FetchError::transport("abc", Some(502), "bad gateway"));
        assert_eq!(err.notice(), Notice::generic());
    }

    #[test]
    fn test_token_errors_get_generic_notice() {
        let err = SyncError::from(deserialize("!!").unwrap_err());
        assert_eq!(err.notice(), Notice::generic());
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let err = SyncError::from(deserialize("!!").unwrap_err());
        let chain = error_chain(&err);
        assert!(chain.starts_with("inline project could not be loaded: "));
        assert!(chain.len() > "inline project could not be loaded: ".len());
    }
}
