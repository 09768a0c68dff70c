//! Tree renderer for matched paths
//!
//! This module provides `TreeRenderer`, which rebuilds the directory
//! hierarchy implied by a flat list of matched files and formats it as
//! indented text.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::paths::display_name;

use super::config::RenderConfig;

/// Children of each directory, keyed by path relative to the root.
/// The root itself is the empty path. Names sort in byte order.
type Hierarchy = BTreeMap<PathBuf, BTreeSet<OsString>>;

/// Formatter that renders matched paths as a tree.
pub struct TreeRenderer {
    config: RenderConfig,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render `paths` beneath `root`. Paths outside the root are skipped and
    /// input order does not matter.
    pub fn render(&self, root: &Path, paths: &[PathBuf]) -> String {
        let mut output = String::new();
        if self.config.show_full_path {
            output.push_str(&root.display().to_string());
            output.push('\n');
        }
        output.push_str(&display_name(root));
        output.push('\n');

        let hierarchy = build_hierarchy(root, paths);
        self.format_children(&hierarchy, Path::new(""), "", &mut output);
        output
    }

    fn format_children(&self, hierarchy: &Hierarchy, dir: &Path, prefix: &str, output: &mut String) {
        let Some(names) = hierarchy.get(dir) else {
            return;
        };
        let style = self.config.style;

        for (i, name) in names.iter().enumerate() {
            let is_last = i == names.len() - 1;
            let connector = if is_last { style.corner() } else { style.tee() };

            output.push_str(prefix);
            output.push_str(connector);
            output.push_str(&name.to_string_lossy());
            output.push('\n');

            let indent = if is_last { style.blank() } else { style.continuation() };
            let child_prefix = format!("{}{}", prefix, indent);
            self.format_children(hierarchy, &dir.join(name), &child_prefix, output);
        }
    }
}

/// Register every matched path and each ancestor between it and the root.
fn build_hierarchy(root: &Path, paths: &[PathBuf]) -> Hierarchy {
    let mut hierarchy = Hierarchy::new();

    for path in paths {
        let Ok(relative) = path.strip_prefix(root) else {
            log::debug!("skipping path outside root: {}", path.display());
            continue;
        };

        let mut parent = PathBuf::new();
        for component in relative.components() {
            let Component::Normal(name) = component else {
                continue;
            };
            hierarchy
                .entry(parent.clone())
                .or_default()
                .insert(name.to_os_string());
            parent.push(name);
        }
    }

    hierarchy
}
