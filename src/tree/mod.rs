//! Directory walking and filtering
//!
//! Raw include/exclude patterns are brace-expanded into a `FilterConfig`,
//! which a `FileMatcher` applies during a depth-first walk to collect the
//! matching files.

mod config;
mod filter;
mod utils;
mod walker;

// Re-export public types
pub use config::FilterConfig;
pub use filter::{PatternSet, expand_braces};
pub use walker::FileMatcher;
