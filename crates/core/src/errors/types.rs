//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for shopkeys operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for shopkeys operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A secret name that can never identify a variable or a `NAME=` line
    InvalidSecretName { name: String, message: String },

    /// Environment variable related errors
    Environment { variable: String, message: String },

    /// The launch sequence could not find its key in the bundle metadata
    MissingLaunchKey { key: String },

    /// Configuration errors
    Configuration { message: String },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}
