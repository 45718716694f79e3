//! Access to the ambient inputs of secret resolution
//!
//! The resolver never reads the process environment or filesystem directly.
//! It goes through [`AmbientEnvironment`], so tests and embedders can supply
//! a fixed snapshot instead of mutating global state.

use crate::env_file::read_lossy;
use shopkeys_utils::SyncEnv;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// The two external inputs a resolution depends on
pub trait AmbientEnvironment {
    /// Look up a variable; `None` when unset or not valid Unicode
    fn var(&self, name: &str) -> Option<String>;

    /// Read a file as text; `Ok(None)` when it does not exist
    fn read_file(&self, path: &Path) -> io::Result<Option<String>>;

    /// Directory that relative fallback paths are resolved against
    fn current_dir(&self) -> io::Result<PathBuf>;
}

impl<T: AmbientEnvironment + ?Sized> AmbientEnvironment for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }

    fn read_file(&self, path: &Path) -> io::Result<Option<String>> {
        (**self).read_file(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        (**self).current_dir()
    }
}

impl<T: AmbientEnvironment + ?Sized> AmbientEnvironment for Box<T> {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }

    fn read_file(&self, path: &Path) -> io::Result<Option<String>> {
        (**self).read_file(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        (**self).current_dir()
    }
}

/// The real process environment and filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl AmbientEnvironment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        match SyncEnv::var(name) {
            Ok(value) => value,
            Err(e) => {
                warn!(variable = %name, error = %e, "Could not read environment variable");
                None
            }
        }
    }

    fn read_file(&self, path: &Path) -> io::Result<Option<String>> {
        read_lossy(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// An in-memory snapshot of variables and files
#[derive(Debug, Clone)]
pub struct FixedEnvironment {
    vars: HashMap<String, String>,
    files: HashMap<PathBuf, String>,
    unreadable: HashSet<PathBuf>,
    current_dir: PathBuf,
}

impl FixedEnvironment {
    /// An empty snapshot rooted at `/`
    #[must_use]
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
            files: HashMap::new(),
            unreadable: HashSet::new(),
            current_dir: PathBuf::from("/"),
        }
    }

    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    /// Register a path that exists but fails to read
    #[must_use]
    pub fn with_unreadable_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = dir.into();
        self
    }
}

impl Default for FixedEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl AmbientEnvironment for FixedEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn read_file(&self, path: &Path) -> io::Result<Option<String>> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is not readable", path.display()),
            ));
        }
        Ok(self.files.get(path).cloned())
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_fixed_environment_lookups() {
        let env = FixedEnvironment::new()
            .with_var("SLPY_API_KEY", "xyz")
            .with_file("/app/.env", "SLPY_API_KEY=abc\n")
            .with_unreadable_file("/locked/.env");

        assert_eq!(env.var("SLPY_API_KEY"), Some("xyz".to_string()));
        assert_eq!(env.var("MISSING"), None);
        assert_eq!(
            env.read_file(Path::new("/app/.env")).unwrap(),
            Some("SLPY_API_KEY=abc\n".to_string())
        );
        assert_eq!(env.read_file(Path::new("/nowhere/.env")).unwrap(), None);
        assert_eq!(
            env.read_file(Path::new("/locked/.env")).unwrap_err().kind(),
            io::ErrorKind::PermissionDenied
        );
        assert_eq!(env.current_dir().unwrap(), PathBuf::from("/"));
    }

    #[test]
    #[serial]
    fn test_process_environment_reads_real_state() {
        let key = "SHOPKEYS_TEST_PROCESS_ENV";
        SyncEnv::set_var(key, "from-process").unwrap();
        assert_eq!(
            ProcessEnvironment.var(key),
            Some("from-process".to_string())
        );
        SyncEnv::remove_var(key).unwrap();
        assert_eq!(ProcessEnvironment.var(key), None);

        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        assert_eq!(ProcessEnvironment.read_file(&path).unwrap(), None);
        std::fs::write(&path, "A=1\n").unwrap();
        assert_eq!(
            ProcessEnvironment.read_file(&path).unwrap(),
            Some("A=1\n".to_string())
        );
    }

    #[test]
    fn test_references_and_boxes_delegate() {
        let env = FixedEnvironment::new().with_var("K", "v");
        let by_ref: &dyn AmbientEnvironment = &env;
        let boxed: Box<dyn AmbientEnvironment> = Box::new(env.clone());
        assert_eq!(by_ref.var("K"), Some("v".to_string()));
        assert_eq!(boxed.var("K"), Some("v".to_string()));
    }
}
