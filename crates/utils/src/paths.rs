//! Path utilities for locating the fallback definitions file

use std::path::{Component, Path, PathBuf};

/// Resolve `relative` against `base` the way build tools resolve
/// project-relative files: absolute paths are taken as-is, everything else
/// is joined onto `base` and normalized lexically.
#[must_use]
pub fn resolve_against(base: &Path, relative: &Path) -> PathBuf {
    if relative.is_absolute() {
        return normalize_lexically(relative);
    }
    normalize_lexically(&base.join(relative))
}

/// Collapse `.` and `..` components without touching the filesystem
///
/// A `..` that would climb above the root is dropped; a leading `..` in a
/// relative path is preserved.
#[must_use]
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
