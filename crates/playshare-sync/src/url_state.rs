//! Reading share state out of a URL fragment.
//!
//! Fragments look like query strings: `#gist=<id>`, `#project=<token>`,
//! `#sample=examples/hello-world`. Only the first occurrence of a parameter
//! counts, and an empty value is the same as no value.

use url::form_urlencoded;
use url::Url;

pub const GIST_PARAM: &str = "gist";
pub const PROJECT_PARAM: &str = "project";
pub const SAMPLE_PARAM: &str = "sample";

/// Which source a fragment asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlShareState {
    RemoteRef(String),
    InlineToken(String),
    None,
}

impl UrlShareState {
    #[must_use]
    pub fn remote_id(&self) -> Option<&str> {
        match self {
            Self::RemoteRef(id) => Some(id.as_str()),
            Self::InlineToken(_) | Self::None => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentParams {
    gist: Option<String>,
    project: Option<String>,
    sample: Option<String>,
}

impl FragmentParams {
    #[must_use]
    pub fn parse(fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(fragment.as_bytes()) {
            let slot = match key.as_ref() {
                GIST_PARAM => &mut params.gist,
                PROJECT_PARAM => &mut params.project,
                SAMPLE_PARAM => &mut params.sample,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        Self::parse(url.fragment().unwrap_or_default())
    }

    /// A remote reference always beats an inline token.
    #[must_use]
    pub fn share_state(&self) -> UrlShareState {
        if let Some(id) = non_empty(self.gist.as_deref()) {
            UrlShareState::RemoteRef(id.to_string())
        } else if let Some(token) = non_empty(self.project.as_deref()) {
            UrlShareState::InlineToken(token.to_string())
        } else {
            UrlShareState::None
        }
    }

    /// The requested sample, if it is present and well formed.
    #[must_use]
    pub fn sample(&self) -> Option<&str> {
        let sample = self.sample.as_deref()?;
        if is_valid_sample(sample) {
            Some(sample)
        } else {
            tracing::debug!(sample, "ignoring malformed sample parameter");
            None
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Sample ids are limited to `[a-zA-Z0-9_/-]+`.
#[must_use]
pub fn is_valid_sample(sample: &str) -> bool {
    !sample.is_empty()
        && sample
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '/'))
}
