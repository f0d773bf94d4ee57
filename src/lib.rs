//! Pixel Operations Library
//!
//! Pixel-wise arithmetic, logic and motion analysis on 8-bit grayscale
//! images, with per-operation statistics.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! source → alignment → ops / motion → OperationResult → export
//!                           ↓
//!                         stats
//! ```
//!
//! # Design Principles
//!
//! - **Equal shapes**: every binary operation rejects mismatched operands;
//!   resizing happens only in [`ImagePair::aligned`]
//! - **Saturating arithmetic**: results are clipped to `[0, 255]`, never wrapped
//! - **Pure engines**: operations borrow their inputs and allocate new results
//! - **Explicit destinations**: exports go to a caller-owned [`Exporter`]
//!
//! # Example
//!
//! ```no_run
//! use pixel_ops::{
//!     motion::MotionDetector,
//!     ops,
//!     source::ImageSource,
//! };
//!
//! let pair = ImageSource::Synthetic.load().unwrap().aligned();
//!
//! let diff = ops::absolute_difference(&pair.first, &pair.second).unwrap();
//! println!("{}", diff.record());
//!
//! let and = ops::boolean::and(&pair.first, &pair.second, 127).unwrap();
//! println!("{}: {:.2}% white", and.title, and.stats.white_percent);
//!
//! let frames = ImageSource::MotionDemo.load().unwrap();
//! let report = MotionDetector::default()
//!     .report(&frames.first, &frames.second)
//!     .unwrap();
//! println!("motion: {}", report.cleaned.stats.status);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod demo;
pub mod export;
pub mod motion;
pub mod ops;
pub mod raster;
pub mod source;
pub mod stats;

// Re-export commonly used types at crate root
pub use config::{ConfigError, FileConfig, OperationConfig, OutputConfig};
pub use demo::{DemoError, Workbench};
pub use export::{Category, ExportError, Exporter};
pub use motion::{MotionDetector, MotionReport, MotionStats, MotionStatus};
pub use ops::OperationResult;
pub use raster::{BinaryMask, Image, ImagePair, OpError, OpResult, Shape};
pub use source::{ImageSource, SourceError};
pub use stats::{Report, StatisticsRecord};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
