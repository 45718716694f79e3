//! Core domain types for the `shopkeys` application.
//!
//! - **`secret`**: secret names, redacting values and resolution records

pub mod secret;

pub use secret::*;
