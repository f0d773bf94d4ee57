//! Writing operation results to disk.
//!
//! The destination is always an explicit [`Exporter`] value owned by the
//! caller. Each export writes the original image, the result image, a
//! side-by-side comparison, and a TOML statistics sidecar.

mod writer;

pub use writer::{compose_comparison, Category, Exporter, COMPARISON_GAP};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting results.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Creating a directory or writing a file failed.
    #[error("failed to create {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Encoding a PNG failed.
    #[error("failed to encode {path}: {source}")]
    Encode {
        /// File involved.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: image::ImageError,
    },
    /// The statistics could not be rendered as TOML.
    #[error("failed to serialize statistics: {0}")]
    Serialize(#[from] toml::ser::Error),
}
