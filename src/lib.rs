//! Wintree - a tree command with glob include and exclude filters

pub mod error;
pub mod output;
pub mod paths;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, WintreeError};
pub use output::{ConnectorStyle, OutputSink, RenderConfig, TreeRenderer};
pub use paths::resolve_root;
pub use tree::{FileMatcher, FilterConfig, PatternSet, expand_braces};
