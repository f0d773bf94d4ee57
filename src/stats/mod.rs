//! Descriptive statistics attached to every operation.
//!
//! Each operation family has its own typed statistics struct. All of
//! them implement [`Report`], which flattens the struct into an ordered
//! [`StatisticsRecord`] for display and export.

mod basic;
mod binary;
mod record;

pub use basic::{basic_statistics, BasicStats, FrameStats};
pub use binary::{binary_statistics, BinaryStats};
pub use record::{Report, StatValue, StatisticsRecord};

pub(crate) use binary::{percentage, threshold_descriptor};
