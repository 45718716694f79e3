//! Layered secret resolution
//!
//! Tiers are tried in order:
//! 1. a non-blank process environment variable named after the secret
//! 2. the first `NAME=value` line of the fallback definitions file
//! 3. the empty string
//!
//! Nothing in this module returns an error. Problems reading the fallback
//! file are logged and treated as if the file had no matching line.

use crate::config::ResolverConfig;
use crate::env_file::EnvFile;
use crate::environment::{AmbientEnvironment, ProcessEnvironment};
use once_cell::unsync::OnceCell;
use shopkeys_core::{Secret, SecretName, SecretSource, SecretValue};
use shopkeys_utils::resolve_against;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Resolves named secrets through the environment, file and absence tiers
pub struct SecretResolver {
    environment: Box<dyn AmbientEnvironment>,
    config: ResolverConfig,
}

impl SecretResolver {
    /// Create a resolver over the real process environment and filesystem
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        Self::with_environment(Box::new(ProcessEnvironment), config)
    }

    /// Create a resolver over a custom environment
    #[must_use]
    pub fn with_environment(
        environment: Box<dyn AmbientEnvironment>,
        config: ResolverConfig,
    ) -> Self {
        Self {
            environment,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Location of the fallback definitions file
    ///
    /// If no base directory is configured and the current directory cannot be
    /// determined, the configured path is used relative to `.`.
    #[must_use]
    pub fn fallback_path(&self) -> PathBuf {
        let base = match &self.config.base_dir {
            Some(dir) => dir.clone(),
            None => self.environment.current_dir().unwrap_or_else(|e| {
                warn!(error = %e, "Could not determine current directory");
                PathBuf::from(".")
            }),
        };
        resolve_against(&base, &self.config.env_file)
    }

    /// Resolve a single secret
    pub fn resolve(&self, name: &SecretName) -> Secret {
        let contents = OnceCell::new();
        self.resolve_with(name, &contents)
    }

    /// Resolve a single secret and return its plaintext value
    pub fn resolve_value(&self, name: &SecretName) -> String {
        self.resolve(name).value().expose().to_string()
    }

    /// Resolve several secrets, reading the fallback file at most once
    pub fn resolve_all(&self, names: &[SecretName]) -> Vec<Secret> {
        let contents = OnceCell::new();
        names
            .iter()
            .map(|name| self.resolve_with(name, &contents))
            .collect()
    }

    fn resolve_with(
        &self,
        name: &SecretName,
        contents: &OnceCell<(PathBuf, Option<String>)>,
    ) -> Secret {
        if let Some(secret) = self.environment_tier(name) {
            return secret;
        }

        let (path, file) = contents.get_or_init(|| {
            let path = self.fallback_path();
            let file = self.read_fallback(&path);
            (path, file)
        });

        let secret = file
            .as_deref()
            .and_then(|c| Self::file_tier(name, path, c))
            .unwrap_or_else(|| Secret::absent(name.clone()));

        debug!(
            name = %name,
            source = %secret.source(),
            length = secret.value().len(),
            "Resolved secret"
        );
        secret
    }

    fn environment_tier(&self, name: &SecretName) -> Option<Secret> {
        let value = self.environment.var(name.as_str())?;
        if value.trim().is_empty() {
            debug!(name = %name, "Environment value is blank, falling back to file");
            return None;
        }

        debug!(name = %name, length = value.len(), "Resolved secret from environment");
        Some(Secret::new(
            name.clone(),
            SecretValue::new(value),
            SecretSource::Environment,
        ))
    }

    fn read_fallback(&self, path: &Path) -> Option<String> {
        match self.environment.read_file(path) {
            Ok(Some(contents)) => Some(contents),
            Ok(None) => {
                debug!(path = %path.display(), "Fallback definitions file not found");
                None
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Could not read fallback definitions file"
                );
                None
            }
        }
    }

    fn file_tier(name: &SecretName, path: &Path, contents: &str) -> Option<Secret> {
        let value = EnvFile::find(contents, name)?;
        Some(Secret::new(
            name.clone(),
            SecretValue::new(value),
            SecretSource::File {
                path: path.to_path_buf(),
            },
        ))
    }
}

impl Default for SecretResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}
