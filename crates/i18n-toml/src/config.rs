//! Accessor configuration using serde, with defaults and TOML loading.

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where to find translations and which locale to serve.
///
/// Usually embedded in an application's own config file:
///
/// ```toml
/// root_dir = "resources/i18n"
/// locale = "ru"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Resources root containing one directory per locale.
    pub root_dir: PathBuf,
    /// Locale directory name under `root_dir`.
    pub locale: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("locales"),
            locale: "en".to_string(),
        }
    }
}

impl I18nConfig {
    /// Creates a configuration for the given root and locale.
    pub fn new(root_dir: impl Into<PathBuf>, locale: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            locale: locale.into(),
        }
    }

    /// Parses configuration from a TOML document. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> I18nResult<Self> {
        toml::from_str(content).map_err(|e| I18nError::Config(e.to_string()))
    }

    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> I18nResult<Self> {
        let path = path.as_ref();
        debug!("Loading i18n configuration: {:?}", path);

        let content = fs::read_to_string(path)
            .map_err(|e| I18nError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }
}
