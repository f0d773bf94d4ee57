//! Thin orchestration over the engines.
//!
//! Suites reproduce the demonstration flows: load a pair, align it, run
//! an operation family, export every result. They hold no algorithmic
//! content of their own.

mod workbench;

pub use workbench::Workbench;

use crate::export::ExportError;
use crate::raster::OpError;
use crate::source::SourceError;
use thiserror::Error;

/// Errors that can end a demonstration suite.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A core operation rejected its input.
    #[error(transparent)]
    Operation(#[from] OpError),
    /// Writing a result failed.
    #[error(transparent)]
    Export(#[from] ExportError),
    /// The image pair could not be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),
}
