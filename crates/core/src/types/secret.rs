//! Secret names, values and resolution records

use crate::constants::ASSIGNMENT_SEPARATOR;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Type-safe wrapper for the identifier of a secret
///
/// A valid name is non-empty and contains no `=`, NUL or whitespace, so it
/// can be used both as an environment variable name and as the key of a
/// `NAME=value` line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SecretName(String);

impl SecretName {
    /// Create a new secret name, validating its shape
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::invalid_secret_name(name, "name must not be empty"));
        }
        if name.contains(ASSIGNMENT_SEPARATOR) {
            return Err(Error::invalid_secret_name(
                name,
                format!("name must not contain '{ASSIGNMENT_SEPARATOR}'"),
            ));
        }
        if name.chars().any(|c| c == '\0' || c.is_whitespace()) {
            return Err(Error::invalid_secret_name(
                name,
                "name must not contain whitespace or NUL",
            ));
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The line prefix that assigns this name in a definitions file
    #[must_use]
    pub fn assignment_prefix(&self) -> String {
        format!("{}{ASSIGNMENT_SEPARATOR}", self.0)
    }
}

impl fmt::Display for SecretName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SecretName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

impl<'de> Deserialize<'de> for SecretName {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Secure string type that zeroizes on drop and never prints its contents
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretValue(String);

impl SecretValue {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the plaintext (be careful with the returned value)
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretValue(<redacted, {} bytes>)", self.0.len())
    }
}

impl fmt::Display for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// The resolution tier that produced a secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "lowercase")]
pub enum SecretSource {
    /// A non-blank process environment variable
    Environment,
    /// A `NAME=value` line in the fallback definitions file
    File { path: PathBuf },
    /// No tier produced a value
    Absent,
}

impl fmt::Display for SecretSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretSource::Environment => f.write_str("environment"),
            SecretSource::File { path } => write!(f, "file ({})", path.display()),
            SecretSource::Absent => f.write_str("absent"),
        }
    }
}

/// A resolved secret. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    name: SecretName,
    value: SecretValue,
    source: SecretSource,
}

impl Secret {
    #[must_use]
    pub fn new(name: SecretName, value: SecretValue, source: SecretSource) -> Self {
        Self {
            name,
            value,
            source,
        }
    }

    /// A secret that no tier could supply; its value is the empty string
    #[must_use]
    pub fn absent(name: SecretName) -> Self {
        Self::new(name, SecretValue::default(), SecretSource::Absent)
    }

    #[must_use]
    pub fn name(&self) -> &SecretName {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &SecretValue {
        &self.value
    }

    #[must_use]
    pub fn source(&self) -> &SecretSource {
        &self.source
    }

    /// Whether the resolved value is non-empty
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.value.is_empty()
    }
}
