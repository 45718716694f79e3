//! Launch-time key check
//!
//! At application launch the maps key comes from a static metadata
//! dictionary bundled with the app. There is no fallback chain: if the key is
//! present it is handed to the maps SDK, plugins are registered, and the
//! framework's default launch handling decides the outcome. If it is missing
//! the launch fails and neither the SDK nor the plugins are touched.
//!
//! This is the opposite policy to [`crate::SecretResolver`], which never
//! fails. Both are kept as they are.

use serde_json::{Map, Value};
use shopkeys_core::{Error, Result, GOOGLE_MAPS_API_KEY};
use std::path::Path;
use tracing::{debug, error, info};

/// Static metadata bundled with the application
pub trait BundleMetadata {
    /// String value for `key`; values of any other type read as missing
    fn string(&self, key: &str) -> Option<String>;
}

/// Receives the maps API key before anything else starts
pub trait MapsServices {
    fn provide_api_key(&mut self, key: &str);
}

/// Registers the application's plugins with the host framework
pub trait PluginRegistrant {
    fn register_plugins(&mut self);
}

/// Bundle metadata backed by a JSON object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoDictionary {
    entries: Map<String, Value>,
}

impl InfoDictionary {
    #[must_use]
    pub fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Load a dictionary from a JSON file whose top level is an object
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system(path, "read info dictionary", e))?;
        let value: Value = serde_json::from_str(&raw).map_err(|e| {
            Error::json(
                format!("invalid info dictionary '{}': {e}", path.display()),
                e,
            )
        })?;

        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(Error::configuration(format!(
                "info dictionary '{}' must be a JSON object, found {}",
                path.display(),
                json_type_name(&other)
            ))),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl BundleMetadata for InfoDictionary {
    fn string(&self, key: &str) -> Option<String> {
        self.entries
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_owned)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The fail-closed launch sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSequence {
    metadata_key: String,
}

impl Default for LaunchSequence {
    fn default() -> Self {
        Self::new(GOOGLE_MAPS_API_KEY)
    }
}

impl LaunchSequence {
    #[must_use]
    pub fn new(metadata_key: impl Into<String>) -> Self {
        Self {
            metadata_key: metadata_key.into(),
        }
    }

    #[must_use]
    pub fn metadata_key(&self) -> &str {
        &self.metadata_key
    }

    /// Run the launch sequence
    ///
    /// Returns whatever `default_launch` returns once the key has been
    /// provided and plugins registered. An empty string still counts as a
    /// present key.
    ///
    /// # Errors
    ///
    /// [`Error::MissingLaunchKey`] when the metadata has no string value for
    /// the key. In that case nothing else is invoked.
    pub fn did_finish_launching<M, S, P, F>(
        &self,
        metadata: &M,
        maps: &mut S,
        plugins: &mut P,
        default_launch: F,
    ) -> Result<bool>
    where
        M: BundleMetadata + ?Sized,
        S: MapsServices + ?Sized,
        P: PluginRegistrant + ?Sized,
        F: FnOnce() -> bool,
    {
        let Some(key) = metadata.string(&self.metadata_key) else {
            error!(key = %self.metadata_key, "Launch key missing from bundle metadata");
            return Err(Error::missing_launch_key(&self.metadata_key));
        };

        debug!(key = %self.metadata_key, length = key.len(), "Providing maps API key");
        maps.provide_api_key(&key);
        plugins.register_plugins();

        let launched = default_launch();
        info!(launched, "Launch sequence finished");
        Ok(launched)
    }
}
