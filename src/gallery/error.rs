// Gallery error types

use std::io;

/// Errors raised by the lister and the visitor counter
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
