//! Glob patterns for include/exclude filtering

use std::sync::LazyLock;

use glob::Pattern;
use regex::Regex;

/// First `{...}` group in a pattern. Nested or repeated groups are not expanded.
static BRACE_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]*)\}").expect("BRACE_GROUP regex is invalid"));

/// Expand a single brace group into one pattern per option.
///
/// `*.{go,js}` becomes `["*.go", "*.js"]`. Options are trimmed, order is kept.
/// An empty group (`*.{}`) is removed without expansion, and a pattern with no
/// group comes back unchanged as a single entry.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(caps) = BRACE_GROUP.captures(pattern) else {
        return vec![pattern.to_string()];
    };
    let group = &caps[0];
    let inner = &caps[1];

    if inner.is_empty() {
        return vec![pattern.replacen(group, "", 1)];
    }

    inner
        .split(',')
        .map(|option| pattern.replacen(group, option.trim(), 1))
        .collect()
}

/// An expanded glob pattern, kept alongside its raw text.
///
/// The raw text is what directory names are compared against (exact
/// equality); the compiled form is what file names are matched with.
#[derive(Debug, Clone)]
struct NamePattern {
    raw: String,
    compiled: Option<Pattern>,
}

impl NamePattern {
    fn new(raw: String) -> Self {
        // `glob` only negates classes with `[!`; accept the `[^` spelling too
        let compiled = match Pattern::new(&raw.replace("[^", "[!")) {
            Ok(p) => Some(p),
            Err(e) => {
                log::warn!("invalid glob pattern '{}': {}; it will never match", raw, e);
                None
            }
        };
        Self { raw, compiled }
    }

    fn matches(&self, name: &str) -> bool {
        self.compiled.as_ref().is_some_and(|p| p.matches(name))
    }
}

/// Ordered list of brace-expanded patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<NamePattern>,
}

impl PatternSet {
    /// Expand every raw pattern in order and compile the results.
    pub fn expand<S: AsRef<str>>(raw: &[S]) -> Self {
        let patterns = raw
            .iter()
            .flat_map(|p| expand_braces(p.as_ref()))
            .map(NamePattern::new)
            .collect();
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// The expanded pattern strings, in order.
    pub fn as_strs(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.raw.as_str())
    }

    /// Glob-match `name` against each pattern, stopping at the first hit.
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    /// True if some pattern is exactly `name`, with no glob interpretation.
    pub fn names(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.raw == name)
    }
}
