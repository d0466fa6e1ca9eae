//! Shell error types.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can take the shell down.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
    #[error("could not read roster seed {}", path.display())]
    SeedRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse roster seed {}", path.display())]
    SeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
