//! Parser for the `KEY=value` fallback definitions file
//!
//! The format is deliberately minimal: one assignment per line, the key is
//! everything before the first `=`, the value is everything after it with
//! surrounding whitespace trimmed. There is no quoting, escaping, comment or
//! `export` syntax. When a key is assigned more than once the first
//! assignment wins.

use indexmap::IndexMap;
use shopkeys_core::{Error, Result, SecretName, ASSIGNMENT_SEPARATOR};
use std::io;
use std::path::Path;
use tracing::trace;

/// Ordered view of the assignments in a definitions file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: IndexMap<String, String>,
}

impl EnvFile {
    /// Parse the full contents of a definitions file
    #[must_use]
    pub fn parse(contents: &str) -> Self {
        let mut entries = IndexMap::new();

        for line in lines(contents) {
            let Some((key, value)) = line.split_once(ASSIGNMENT_SEPARATOR) else {
                continue;
            };
            if key.is_empty() {
                continue;
            }
            // First assignment wins
            entries
                .entry(key.to_string())
                .or_insert_with(|| value.trim().to_string());
        }

        trace!(entries = entries.len(), "parsed definitions file");
        Self { entries }
    }

    /// Scan `contents` for the first line assigning `name`
    ///
    /// Equivalent to `EnvFile::parse(contents).get(name)` but stops at the
    /// first match without building the whole map.
    #[must_use]
    pub fn find(contents: &str, name: &SecretName) -> Option<String> {
        let prefix = name.assignment_prefix();
        lines(contents)
            .find_map(|line| line.strip_prefix(prefix.as_str()))
            .map(|value| value.trim().to_string())
    }

    /// Look up the value assigned to `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over assignments in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consume the file and return the underlying ordered mapping
    #[must_use]
    pub fn into_map(self) -> IndexMap<String, String> {
        self.entries
    }
}

/// Load and parse a definitions file
///
/// Returns `Ok(None)` when the file does not exist. Any other I/O failure is
/// reported as [`Error::FileSystem`].
pub fn load(path: &Path) -> Result<Option<EnvFile>> {
    let contents = read_lossy(path).map_err(|e| Error::file_system(path, "read", e))?;
    Ok(contents.map(|c| EnvFile::parse(&c)))
}

/// Read a file as text, decoding invalid UTF-8 lossily
///
/// `Ok(None)` means the file does not exist.
pub fn read_lossy(path: &Path) -> io::Result<Option<String>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Split on `\n`, `\r\n` or a lone `\r`
fn lines(contents: &str) -> impl Iterator<Item = &str> {
    contents.split(['\n', '\r'])
}
