//! Error types for playmix

use std::path::PathBuf;

/// Errors raised while building or merging playlists
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No filename given")]
    Usage,

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot derive a playlist name from {}", path.display())]
    InvalidName { path: PathBuf },
}

/// Result type specialized for playmix
pub type Result<T> = std::result::Result<T, Error>;
