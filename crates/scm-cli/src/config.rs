//! Optional TOML configuration for menu roots.
//!
//! ```toml
//! extensions_dir = "C:/Tools/Extensions"
//! top_level_dir = "TopLevelItems"   # relative to this file
//! extensions_label = "Scripts"
//! ```
//!
//! The file is only read, never written.

use std::path::{Path, PathBuf};

use scm_core::{DEFAULT_EXTENSIONS_LABEL, MenuRoots};
use serde::Deserialize;
use tracing::debug;

/// File looked up next to the executable when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "scm.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuConfig {
    #[serde(default)]
    pub extensions_dir: Option<PathBuf>,
    #[serde(default)]
    pub top_level_dir: Option<PathBuf>,
    #[serde(default)]
    pub extensions_label: Option<String>,
}

impl MenuConfig {
    /// Reads and parses `path`, resolving relative roots against its folder.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::parse(&contents, path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Loads `explicit` if given, otherwise [`CONFIG_FILE_NAME`] inside
    /// `search_dir` when it exists, otherwise the empty configuration.
    pub fn discover(explicit: Option<&Path>, search_dir: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match search_dir.map(|dir| dir.join(CONFIG_FILE_NAME)) {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "using discovered config file");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    #[must_use]
    fn relative_to(self, base: &Path) -> Self {
        let resolve = |path: PathBuf| if path.is_relative() { base.join(path) } else { path };
        Self {
            extensions_dir: self.extensions_dir.map(resolve),
            top_level_dir: self.top_level_dir.map(resolve),
            extensions_label: self.extensions_label,
        }
    }

    /// Roots named by this configuration, with `extensions_dir` and
    /// `top_level_dir` overridden by the given values when set.
    pub fn roots(&self, extensions_dir: Option<PathBuf>, top_level_dir: Option<PathBuf>) -> MenuRoots {
        let label = self
            .extensions_label
            .clone()
            .unwrap_or_else(|| DEFAULT_EXTENSIONS_LABEL.to_string());
        MenuRoots::new(
            extensions_dir.or_else(|| self.extensions_dir.clone()),
            top_level_dir.or_else(|| self.top_level_dir.clone()),
        )
        .with_extensions_label(label)
    }
}
