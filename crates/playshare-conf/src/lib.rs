use std::fmt;
use std::path::Path;
use std::str::FromStr;

use config::Config;
use config::ConfigError as ExternalConfigError;
use config::Environment;
use config::File;
use config::FileFormat;
use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

const CONFIG_FILE: &str = "playshare.toml";
const ENV_PREFIX: &str = "PLAYSHARE";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration build/deserialize error")]
    Config(#[from] ExternalConfigError),
}

/// Which source-language variant of the built-in samples to serve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLanguage {
    #[default]
    Ts,
    Js,
}

#[derive(Error, Debug)]
#[error("unknown code language `{0}`, expected `ts` or `js`")]
pub struct UnknownLanguage(String);

impl FromStr for CodeLanguage {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ts" | "typescript" => Ok(Self::Ts),
            "js" | "javascript" => Ok(Self::Js),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ts => f.write_str("ts"),
            Self::Js => f.write_str("js"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the gist-compatible API used to resolve `gist` links.
    pub api_base_url: String,
    /// Config every inline project extends.
    pub base_config: String,
    /// Root of the TypeScript samples.
    pub samples_root: String,
    /// Root of the generated JavaScript samples.
    pub js_samples_root: String,
    pub default_sample: String,
    pub manifest_file: String,
    pub language: CodeLanguage,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            base_config: "/samples/base.json".to_string(),
            samples_root: "/samples".to_string(),
            js_samples_root: "/samples/js".to_string(),
            default_sample: "examples/hello-world".to_string(),
            manifest_file: "project.json".to_string(),
            language: CodeLanguage::Ts,
            debug: false,
        }
    }
}

impl Settings {
    pub fn new(project_root: &Path) -> Result<Self, ConfigError> {
        let user_config_file = ProjectDirs::from("dev", "playshare", "playshare")
            .map(|proj_dirs| proj_dirs.config_dir().join(CONFIG_FILE));

        Self::load_from_paths(
            project_root,
            user_config_file.as_deref(),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    fn load_from_paths(
        project_root: &Path,
        user_config_path: Option<&Path>,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = user_config_path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        builder = builder.add_source(
            File::from(project_root.join(".playshare.toml"))
                .format(FileFormat::Toml)
                .required(false),
        );

        builder = builder.add_source(
            File::from(project_root.join(CONFIG_FILE))
                .format(FileFormat::Toml)
                .required(false),
        );

        builder = builder.add_source(environment);

        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;
        tracing::debug!(?settings, "loaded settings");
        Ok(settings)
    }

    /// Root directory of the samples for `language`.
    #[must_use]
    pub fn samples_root_for(&self, language: CodeLanguage) -> &str {
        match language {
            CodeLanguage::Ts => &self.samples_root,
            CodeLanguage::Js => &self.js_samples_root,
        }
    }

    /// `<root>/<sample>/<manifest>` for a sample under the given language.
    #[must_use]
    pub fn sample_manifest_path(&self, language: CodeLanguage, sample: &str) -> String {
        format!(
            "{}/{}/{}",
            self.samples_root_for(language).trim_end_matches('/'),
            sample,
            self.manifest_file
        )
    }
}
