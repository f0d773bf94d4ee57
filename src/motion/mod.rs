//! Motion detection by frame differencing.
//!
//! Difference masks can be cleaned with a 3x3 morphological close and
//! open, then summarized by their connected regions.

mod detector;
pub mod morphology;
mod regions;

pub use detector::{
    cleaned_motion, simple_motion, MotionDetector, MotionReport, MotionStats, MotionStatus,
    DEFAULT_LOW_MOTION_THRESHOLD, DEFAULT_MOTION_THRESHOLD,
};
pub use regions::{find_regions, region_summary, Region, RegionSummary};
