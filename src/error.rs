use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixture generator error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Splits JSON errors into I/O failures on `path` and genuine encoding failures
    pub fn from_json(path: impl AsRef<Path>, error: serde_json::Error) -> Self {
        if error.is_io() {
            Self::io(path, error.into())
        } else {
            Self::Serialization(error)
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
