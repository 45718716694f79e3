//! Secret resolution for the shops app shell
//!
//! Build-time secrets are resolved through an ordered fallback chain: a
//! non-blank process environment variable wins, then the first matching
//! `NAME=value` line of a local definitions file, and otherwise the empty
//! string. Resolution never fails.
//!
//! The launch-time check in [`launch`] is deliberately different: it reads a
//! single key from bundle metadata and fails closed when it is missing.

pub mod config;
pub mod env_file;
pub mod environment;
pub mod launch;
mod lazy;
mod resolver;


pub use config::ResolverConfig;
pub use env_file::{load, EnvFile};
pub use environment::{AmbientEnvironment, FixedEnvironment, ProcessEnvironment};
pub use launch::{
    BundleMetadata, InfoDictionary, LaunchSequence, MapsServices, PluginRegistrant,
};
pub use lazy::LazySecret;
pub use resolver::SecretResolver;
