//! Shared utility functions for directory walking

use std::fs::DirEntry;
use std::path::Path;

use crate::error::{Result, WintreeError};

/// Read a directory's entries sorted by file name.
///
/// Unlike a best-effort listing, any unreadable entry fails the whole read.
pub fn read_sorted_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let entries = std::fs::read_dir(dir).map_err(|e| WintreeError::traversal(dir, e))?;

    let mut entries = entries
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| WintreeError::traversal(dir, e))?;
    entries.sort_by_key(|a| a.file_name());
    Ok(entries)
}

/// Base name of a directory entry, lossily converted for pattern matching.
pub fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_sorted_entries_orders_by_name() {
        let dir = TempDir::new().unwrap();
        for name in ["zeta", "alpha", "Mid", "beta"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        let names: Vec<String> = read_sorted_entries(dir.path())
            .unwrap()
            .iter()
            .map(entry_name)
            .collect();
        assert_eq!(names, vec!["Mid", "alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_read_sorted_entries_missing_dir() {
        let err = read_sorted_entries(Path::new("/nonexistent/wintree/dir")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/wintree/dir"));
    }
}
