// THEORY:
// One error type for the whole library. Every failure in this crate is fatal:
// nothing is retried and nothing is partially written, so the variants only need
// to say *where* things went wrong (which file, which stage), not how to recover.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EdgeError>;

#[derive(Debug, Error)]
pub enum EdgeError {
    /// The input path is missing, unreadable, or not a decodable image.
    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output could not be encoded or written (bad extension, missing directory, permissions).
    #[error("failed to write image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Raw pixel data does not match the declared matrix shape.
    #[error("pixel count mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A row-band task of the parallel pipeline panicked or was cancelled.
    #[error("worker task failed: {0}")]
    Worker(String),
}
