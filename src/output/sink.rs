//! Output destinations for a rendered tree

use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::{Result, WintreeError};

/// Where the rendered tree goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputSink {
    #[default]
    Console,
    /// Created if absent, overwritten otherwise.
    File(PathBuf),
}

impl OutputSink {
    /// Write `tree` to this sink. `stdout` receives the tree for the console
    /// sink and a confirmation line otherwise.
    pub fn write(&self, tree: &str, stdout: &mut impl Write) -> Result<()> {
        match self {
            Self::Console => {
                log::debug!("writing tree to stdout");
                stdout
                    .write_all(tree.as_bytes())
                    .map_err(Self::stdout_error)
            }
            Self::File(path) => {
                log::debug!("writing tree to {}", path.display());
                std::fs::write(path, tree).map_err(|source| WintreeError::Sink {
                    path: path.clone(),
                    source,
                })?;
                log::info!("wrote {} bytes to {}", tree.len(), path.display());
                writeln!(stdout, "Output written to {}", path.display())
                    .map_err(Self::stdout_error)
            }
        }
    }

    fn stdout_error(source: io::Error) -> WintreeError {
        WintreeError::Sink {
            path: PathBuf::from("<stdout>"),
            source,
        }
    }
}
