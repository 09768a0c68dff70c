//! Configuration types for the matcher

use super::filter::PatternSet;

/// Resolved filter configuration for one walk.
///
/// Exclusion is always evaluated before inclusion. A non-empty include set
/// switches the walk into whitelist mode.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    pub exclude: PatternSet,
    pub include: PatternSet,
    /// Deepest level to report, where the root's children are level 0.
    /// `None` means unlimited.
    pub max_depth: Option<usize>,
}

impl FilterConfig {
    /// Brace-expand raw user patterns into a filter with unlimited depth.
    pub fn from_patterns<S: AsRef<str>>(exclude: &[S], include: &[S]) -> Self {
        Self {
            exclude: PatternSet::expand(exclude),
            include: PatternSet::expand(include),
            max_depth: None,
        }
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn is_include_mode(&self) -> bool {
        !self.include.is_empty()
    }

    /// Whether an entry at `depth` lies beyond the configured bound.
    pub fn exceeds_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}
