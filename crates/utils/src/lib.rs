//! Shared utilities and pure functions for shopkeys
//!
//! This crate provides helpers used throughout the shopkeys workspace:
//! synchronized access to the process environment, path arithmetic for the
//! fallback definitions file, and tracing setup for the binary.

pub mod paths;
pub mod sync;
pub mod tracing;

pub use paths::*;
pub use sync::*;
