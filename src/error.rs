//! Error types for configuration and catalog loading

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown project category: {0:?}")]
    UnknownCategory(String),

    #[error("catalog {0} contains no projects")]
    EmptyCatalog(PathBuf),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
