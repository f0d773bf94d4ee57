//! Pixel-wise operations: subtraction, binarization, Boolean algebra,
//! and blending.
//!
//! Every entry point borrows its operands, validates them eagerly, and
//! returns a newly allocated [`OperationResult`].

mod binarize;
mod blend;
pub mod boolean;
mod subtraction;

pub use binarize::{binarize, try_binarize};
pub use blend::{blend, BlendStats};
pub use subtraction::{absolute_difference, offset_difference, DifferenceStats, OffsetStats};

use crate::raster::Image;
use crate::stats::{Report, StatisticsRecord};

/// Default threshold for binarization.
pub const DEFAULT_BINARY_THRESHOLD: u8 = 127;
/// Default constant added by [`offset_difference`].
pub const DEFAULT_OFFSET: i16 = 100;
/// Default blending weight of the first image.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Output of a single operation: the result image, its statistics,
/// and a human-readable title.
#[derive(Debug, Clone)]
pub struct OperationResult<S> {
    /// The result image.
    pub image: Image,
    /// Statistics describing the result.
    pub stats: S,
    /// Human-readable title, used in exports.
    pub title: String,
}

impl<S: Report> OperationResult<S> {
    /// Bundles a result image with its statistics and title.
    pub fn new(image: Image, stats: S, title: impl Into<String>) -> Self {
        Self {
            image,
            stats,
            title: title.into(),
        }
    }

    /// Flattens the typed statistics into an ordered record.
    pub fn record(&self) -> StatisticsRecord {
        self.stats.record()
    }
}
