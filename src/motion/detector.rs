//! Frame-differencing motion detection.
//!
//! A frame pair moves through four stages: the raw pair, a difference
//! mask, an optional morphologically cleaned mask, and a region
//! summary of whichever mask is analyzed.

use super::morphology;
use super::regions::{region_summary, RegionSummary};
use crate::ops::{absolute_difference, OperationResult};
use crate::raster::{BinaryMask, Image, OpResult, BACKGROUND, FOREGROUND};
use crate::stats::{percentage, threshold_descriptor, FrameStats, Report, StatisticsRecord};
use std::fmt;

/// Default difference threshold for motion.
pub const DEFAULT_MOTION_THRESHOLD: u8 = 30;
/// Lower threshold used for the sensitivity comparison.
pub const DEFAULT_LOW_MOTION_THRESHOLD: u8 = 15;

/// Motion percentage above which motion counts as detected.
const DETECTION_PERCENT: f64 = 1.0;

/// Whether a mask shows meaningful motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionStatus {
    /// More than 1% of the samples changed.
    Detected,
    /// At most 1% of the samples changed.
    Minimal,
}

impl MotionStatus {
    fn from_percent(percent: f64) -> Self {
        if percent > DETECTION_PERCENT {
            MotionStatus::Detected
        } else {
            MotionStatus::Minimal
        }
    }
}

impl fmt::Display for MotionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionStatus::Detected => f.write_str("DETECTED"),
            MotionStatus::Minimal => f.write_str("MINIMAL"),
        }
    }
}

/// Statistics of a motion mask.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionStats {
    /// Foreground samples in the mask.
    pub motion_pixels: usize,
    /// Samples in the mask.
    pub total_pixels: usize,
    /// `motion_pixels / total_pixels * 100`.
    pub motion_percent: f64,
    /// Difference threshold that produced the mask.
    pub threshold: u8,
    /// Detection verdict derived from `motion_percent`.
    pub status: MotionStatus,
    /// True once morphological cleanup has been applied.
    pub cleaned: bool,
    /// Region summary, once the mask has been analyzed.
    pub regions: Option<RegionSummary>,
}

impl MotionStats {
    fn measure(mask: &BinaryMask, threshold: u8, cleaned: bool) -> Self {
        let motion_pixels = mask.foreground_count();
        let total_pixels = mask.image().pixel_count();
        let motion_percent = percentage(motion_pixels, total_pixels);

        Self {
            motion_pixels,
            total_pixels,
            motion_percent,
            threshold,
            status: MotionStatus::from_percent(motion_percent),
            cleaned,
            regions: None,
        }
    }

    /// Attaches the region summary of the analyzed mask.
    pub fn with_regions(mut self, regions: RegionSummary) -> Self {
        self.regions = Some(regions);
        self
    }

    /// Returns the method label shown in reports.
    pub fn method(&self) -> &'static str {
        if self.cleaned {
            "With Cleanup"
        } else {
            "Simple Differencing"
        }
    }
}

impl Report for MotionStats {
    fn record(&self) -> StatisticsRecord {
        let mut record = StatisticsRecord::new()
            .with("Motion Pixels", self.motion_pixels)
            .with("Total Pixels", self.total_pixels)
            .with("Motion %", self.motion_percent)
            .with("Threshold", threshold_descriptor(self.threshold))
            .with("Status", self.status.to_string());
        if self.cleaned {
            record = record.with("Cleaned", "Morphological");
        }
        record = record.with("Method", self.method());

        match &self.regions {
            Some(regions) => record.extend(regions.record()),
            None => record,
        }
    }
}

/// Thresholds `|frame1 - frame2|` with the strictly-greater rule.
///
/// Frames must share a shape; align them beforehand if they do not.
pub fn simple_motion(
    frame1: &Image,
    frame2: &Image,
    threshold: u8,
) -> OpResult<(BinaryMask, MotionStats)> {
    let diff = absolute_difference(frame1, frame2)?;
    let motion = diff
        .image
        .map(|d| if d > threshold { FOREGROUND } else { BACKGROUND });
    let mask = BinaryMask::new_unchecked(motion, threshold);
    let stats = MotionStats::measure(&mask, threshold, false);

    tracing::debug!(
        threshold,
        motion_percent = stats.motion_percent,
        status = %stats.status,
        "Simple motion computed"
    );
    Ok((mask, stats))
}

/// Runs [`simple_motion`], then a morphological close followed by an
/// open, and measures the cleaned mask.
pub fn cleaned_motion(
    frame1: &Image,
    frame2: &Image,
    threshold: u8,
) -> OpResult<(BinaryMask, MotionStats)> {
    let (raw, _) = simple_motion(frame1, frame2, threshold)?;
    let cleaned = morphology::open(&morphology::close(&raw));
    let stats = MotionStats::measure(&cleaned, threshold, true);

    tracing::debug!(
        threshold,
        before = raw.foreground_count(),
        after = stats.motion_pixels,
        "Motion mask cleaned"
    );
    Ok((cleaned, stats))
}

/// Full motion analysis of one frame pair.
#[derive(Debug, Clone)]
pub struct MotionReport {
    /// The first frame with its intensity statistics.
    pub frame1: OperationResult<FrameStats>,
    /// The second frame with its intensity statistics.
    pub frame2: OperationResult<FrameStats>,
    /// Raw difference mask at the main threshold.
    pub simple: OperationResult<MotionStats>,
    /// Cleaned mask at the main threshold.
    pub cleaned: OperationResult<MotionStats>,
    /// Cleaned mask at the low threshold.
    pub low_threshold: OperationResult<MotionStats>,
}

impl MotionReport {
    /// The three motion variants, in detection order.
    pub fn variants(&self) -> [&OperationResult<MotionStats>; 3] {
        [&self.simple, &self.cleaned, &self.low_threshold]
    }
}

/// Runs every motion variant over a frame pair.
#[derive(Debug, Clone, Copy)]
pub struct MotionDetector {
    threshold: u8,
    low_threshold: u8,
}

impl MotionDetector {
    /// Creates a detector with a main and a low difference threshold.
    pub fn new(threshold: u8, low_threshold: u8) -> Self {
        Self {
            threshold,
            low_threshold,
        }
    }

    /// Returns the main difference threshold.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Returns the low difference threshold.
    pub fn low_threshold(&self) -> u8 {
        self.low_threshold
    }

    /// Builds the full report for `frame1` and `frame2`.
    pub fn report(&self, frame1: &Image, frame2: &Image) -> OpResult<MotionReport> {
        let stats1 = FrameStats::capture("Original", "Static Scene", frame1)?;
        let stats2 = FrameStats::capture("Modified", "With Motion", frame2)?;

        let analyzed = |(mask, stats): (BinaryMask, MotionStats), title: &str| {
            let stats = stats.with_regions(region_summary(&mask));
            OperationResult::new(mask.into_image(), stats, title)
        };

        let simple = analyzed(
            simple_motion(frame1, frame2, self.threshold)?,
            "Motion Detection (Simple)",
        );
        let cleaned = analyzed(
            cleaned_motion(frame1, frame2, self.threshold)?,
            "Motion Detection (Cleaned)",
        );
        let low_threshold = analyzed(
            cleaned_motion(frame1, frame2, self.low_threshold)?,
            "Motion Detection (Low Threshold)",
        );

        tracing::info!(
            simple_regions = simple.stats.regions.map_or(0, |r| r.count),
            cleaned_regions = cleaned.stats.regions.map_or(0, |r| r.count),
            status = %simple.stats.status,
            "Motion report built"
        );

        Ok(MotionReport {
            frame1: OperationResult::new(frame1.clone(), stats1, "Frame 1 (Original)"),
            frame2: OperationResult::new(frame2.clone(), stats2, "Frame 2 (With Motion)"),
            simple,
            cleaned,
            low_threshold,
        })
    }
}

impl Default for MotionDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MOTION_THRESHOLD, DEFAULT_LOW_MOTION_THRESHOLD)
    }
}
