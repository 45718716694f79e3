//! Resolver configuration

use serde::{Deserialize, Serialize};
use shopkeys_core::{Error, Result, DEFAULT_ENV_FILE};
use std::path::{Path, PathBuf};

/// Where the file tier looks for its definitions file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Definitions file, relative to `base_dir` unless absolute
    pub env_file: PathBuf,
    /// Directory of the resolving component; the current directory when unset
    pub base_dir: Option<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            base_dir: None,
        }
    }
}

impl ResolverConfig {
    /// Load configuration from a JSON file; missing fields take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system(path, "read config", e))?;
        serde_json::from_str(&raw).map_err(|e| {
            Error::json(
                format!("invalid resolver config '{}': {e}", path.display()),
                e,
            )
        })
    }

    #[must_use]
    pub fn with_env_file(mut self, env_file: impl Into<PathBuf>) -> Self {
        self.env_file = env_file.into();
        self
    }

    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }
}
