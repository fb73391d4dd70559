//! Error types shared by the generator, validator and sample viewer.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The topic list does not exist at the expected location.
    #[error("topic list not found: expected {}", path.display())]
    TopicsNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset to validate or preview does not exist.
    #[error("dataset not found: expected {}", path.display())]
    DatasetNotFound { path: PathBuf },

    #[error("invalid JSON in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Maps an I/O failure while opening `path` for reading, turning
    /// `NotFound` into the given dedicated variant.
    pub(crate) fn reading(path: PathBuf, source: std::io::Error, not_found: fn(PathBuf) -> Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            not_found(path)
        } else {
            Error::Read { path, source }
        }
    }
}
