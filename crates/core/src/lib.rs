//! Core domain types, errors, and constants for `shopkeys`.
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum and `Result` alias shared by every crate
//!   in the workspace.
//! - **`types`**: newtype wrappers such as `SecretName` and `SecretValue` that
//!   enforce invariants at the type level, plus the resolved `Secret` record.
//! - **`constants`**: well-known secret names, metadata keys and default paths.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
    types::*,
};
