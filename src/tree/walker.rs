//! FileMatcher - walks a directory and collects the files that pass the filters

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{Result, WintreeError};

use super::config::FilterConfig;
use super::utils::{entry_name, read_sorted_entries};

/// Depth-first matcher over a directory tree.
///
/// Results come back in walk order. Directories are never reported on their
/// own; only files found beneath the root are.
pub struct FileMatcher {
    config: FilterConfig,
}

impl FileMatcher {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Collect every file under `root` that passes the filters.
    ///
    /// Any I/O error during the walk aborts it; there is no partial result.
    pub fn find_matches(&self, root: &Path) -> Result<Vec<PathBuf>> {
        log::debug!(
            "walking {} with {} exclude and {} include patterns",
            root.display(),
            self.config.exclude.len(),
            self.config.include.len()
        );
        let mut matches = Vec::new();
        if self.root_is_whitelisted(root) {
            log::debug!("including root directory: {}", root.display());
            self.collect_whitelisted(root, &mut matches)?;
        } else {
            self.walk_dir(root, 0, &mut matches)?;
        }
        log::debug!(
            "matched {} files under {}",
            matches.len(),
            root.display()
        );
        Ok(matches)
    }

    /// The root is never pruned, but an include pattern naming it exactly
    /// whitelists the whole tree unless an exclude pattern also matches it.
    fn root_is_whitelisted(&self, root: &Path) -> bool {
        let Some(name) = root.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        self.config.is_include_mode()
            && !self.config.exclude.matches(&name)
            && self.config.include.names(&name)
    }

    fn walk_dir(&self, dir: &Path, depth: usize, matches: &mut Vec<PathBuf>) -> Result<()> {
        for entry in read_sorted_entries(dir)? {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|e| WintreeError::traversal(&path, e))?;
            let name = entry_name(&entry);

            if file_type.is_dir() {
                if self.config.exceeds_depth(depth) {
                    log::trace!("pruned by depth: {}", path.display());
                    continue;
                }
                if self.config.exclude.matches(&name) {
                    log::trace!("pruned by exclude: {}", path.display());
                    continue;
                }
                if self.config.is_include_mode() && self.config.include.names(&name) {
                    log::debug!("including directory: {}", path.display());
                    self.collect_whitelisted(&path, matches)?;
                    continue;
                }
                self.walk_dir(&path, depth + 1, matches)?;
            } else {
                if self.config.exclude.matches(&name) || self.config.exceeds_depth(depth) {
                    continue;
                }
                if !self.config.is_include_mode() || self.config.include.matches(&name) {
                    matches.push(path);
                }
            }
        }
        Ok(())
    }

    /// Add every file beneath a directory named by an include pattern.
    ///
    /// Only file names are checked against the exclude patterns here and the
    /// depth bound does not apply.
    fn collect_whitelisted(&self, dir: &Path, matches: &mut Vec<PathBuf>) -> Result<()> {
        let walker = WalkBuilder::new(dir)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_none_or(|t| t.is_dir()) {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if self.config.exclude.matches(&name) {
                continue;
            }
            matches.push(entry.into_path());
        }
        Ok(())
    }
}
