//! Synchronization helpers around process-global state

pub mod env;

pub use env::SyncEnv;
