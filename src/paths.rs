//! Root path resolution

use std::path::{Component, Path, PathBuf};

use crate::error::{Result, WintreeError};

/// Make `path` absolute against the current directory and fold `.`/`..`
/// components lexically. Symlinks are not resolved and the path does not
/// need to exist.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|source| WintreeError::InvalidPath {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize(&absolute))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `pop` is a no-op at the filesystem root, so "/.." stays "/"
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Display name for the root line: the final component, or the whole path
/// when there is none (e.g. `/`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
