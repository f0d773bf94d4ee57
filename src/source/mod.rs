//! Image sources.
//!
//! Sources hand the engines two grayscale images. They are
//! collaborators of the core: the engines only see the arrays and their
//! shapes.

mod files;
mod synthetic;

pub use files::{load_file_pair, MAX_FILE_SIDE};
pub use synthetic::{motion_demo_pair, synthetic_pair, Canvas, SYNTHETIC_SIZE};

use crate::raster::ImagePair;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while acquiring an image pair.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A file could not be opened or decoded.
    #[error("failed to decode {path}: {source}")]
    Decode {
        /// File involved.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: image::ImageError,
    },
    /// A decoded file has zero width or height.
    #[error("image {0} has no samples")]
    EmptyImage(PathBuf),
    /// The file source was selected without both paths.
    #[error("file source requires two image paths")]
    MissingPaths,
}

/// Where an image pair comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageSource {
    /// Two geometric scenes drawn in memory.
    #[default]
    Synthetic,
    /// A static frame and a frame with moved and new objects.
    MotionDemo,
    /// Two image files on disk.
    Files {
        /// Path of image A.
        first: PathBuf,
        /// Path of image B.
        second: PathBuf,
    },
}

impl ImageSource {
    /// Produces the pair described by this source.
    pub fn load(&self) -> Result<ImagePair, SourceError> {
        let pair = match self {
            ImageSource::Synthetic => synthetic_pair(),
            ImageSource::MotionDemo => motion_demo_pair(),
            ImageSource::Files { first, second } => load_file_pair(first, second)?,
        };
        tracing::info!(
            source = self.name(),
            first = %pair.first.shape(),
            second = %pair.second.shape(),
            "Image pair loaded"
        );
        Ok(pair)
    }

    /// Returns the name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ImageSource::Synthetic => "synthetic",
            ImageSource::MotionDemo => "motion-demo",
            ImageSource::Files { .. } => "files",
        }
    }
}
