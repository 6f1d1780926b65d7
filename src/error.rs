// src/error.rs
use std::path::PathBuf;

use crate::config::consts::ENV_KEY;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Failed to parse {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("Set {} in a .env file or environment (e.g. {}=your-fernet-key).", ENV_KEY, ENV_KEY)]
    MissingKey,

    #[error("Invalid {}: not a url-safe base64 32-byte Fernet key", ENV_KEY)]
    InvalidKey,

    #[error("Decryption failed (wrong key or file not encrypted?). {}", .0.display())]
    Decrypt(PathBuf),

    #[error("Proverb archive not found: {}", .0.display())]
    ArchiveNotFound(PathBuf),

    #[error("Proverb archive is empty")]
    EmptyArchive,

    #[error("Model not found at {}", .0.display())]
    ModelNotFound(PathBuf),

    #[error("No substantive proverb texts found in archive (editorial-only entries excluded).")]
    NoTrainingText,

    #[error("Game aborted: input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
