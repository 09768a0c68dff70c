//! Output configuration types

/// Box-drawing characters used to connect tree entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectorStyle {
    #[default]
    Unicode,
    Ascii,
}

impl ConnectorStyle {
    /// Connector before an entry that has siblings after it.
    pub fn tee(self) -> &'static str {
        match self {
            Self::Unicode => "├── ",
            Self::Ascii => "|-- ",
        }
    }

    /// Connector before the last entry of its directory.
    pub fn corner(self) -> &'static str {
        match self {
            Self::Unicode => "└── ",
            Self::Ascii => "`-- ",
        }
    }

    /// Indentation under an ancestor that still has siblings to print.
    pub fn continuation(self) -> &'static str {
        match self {
            Self::Unicode => "│   ",
            Self::Ascii => "|   ",
        }
    }

    /// Indentation under an ancestor that was the last of its directory.
    pub fn blank(self) -> &'static str {
        "    "
    }
}

/// Configuration for rendering a tree.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Print the full root path on its own line before the tree.
    pub show_full_path: bool,
    pub style: ConnectorStyle,
}
