//! Error types shared by the walker, the cleaner and the tree renderer.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A root argument that cannot be walked at all.
///
/// These are reported to the user and the root is skipped; they never turn
/// into a failed run on their own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("directory '{}' does not exist", .0.display())]
    MissingRoot(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            Self::MissingRoot(path) | Self::NotADirectory(path) => path,
        }
    }
}

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error("cannot access '{}': {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' vanished during the walk", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot delete '{}': {source}", path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    /// Map an I/O failure on `path` to `NotFound` or `Access`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Access {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
