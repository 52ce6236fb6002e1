use std::path::PathBuf;

use thiserror::Error;

use crate::http::HttpError;

#[derive(Error, Debug)]
pub enum FetchError {
    // Resolution errors
    #[error("error finding DJI SDK URL from podspec {manifest_url}")]
    UrlNotFound { manifest_url: String },

    // Layout errors
    #[error("didn't find {}, check to see what was extracted", path.display())]
    LayoutMissing { path: PathBuf },

    // Network errors
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    // Archive errors
    #[error("Extraction failed: {0}")]
    Extract(String),

    // Filesystem errors
    #[error("Failed to move {} into {}", from.display(), to.display())]
    Relocate {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove {}", path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// Whether this is one of the two checked failures (no source URL, bad
    /// archive layout) rather than a transport or filesystem fault.
    pub fn is_curated(&self) -> bool {
        matches!(self, FetchError::UrlNotFound { .. } | FetchError::LayoutMissing { .. })
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
