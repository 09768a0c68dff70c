//! Tree formatting and output
//!
//! # Module Structure
//!
//! - `config` - Render configuration and connector styles
//! - `tree` - Renders matched paths as an indented tree
//! - `sink` - Console and file destinations

mod config;
mod sink;
mod tree;

// Re-export public types
pub use config::{ConnectorStyle, RenderConfig};
pub use sink::OutputSink;
pub use tree::TreeRenderer;
