//! Descriptive statistics over all samples of an image.

use super::record::{Report, StatisticsRecord};
use crate::raster::{Image, OpResult};

/// Mean, spread, and range of an image.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicStats {
    /// Arithmetic mean of all samples.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Brightest sample.
    pub max: u8,
    /// Darkest sample.
    pub min: u8,
    /// Number of samples analyzed.
    pub total: usize,
}

/// Computes exact statistics over every sample of `image`.
///
/// Mean and standard deviation are accumulated in `f64` so that 8-bit
/// input is never truncated.
pub fn basic_statistics(image: &Image) -> OpResult<BasicStats> {
    image.ensure_non_empty()?;
    let data = image.pixels();

    let n = data.len() as f64;
    let mean = data.iter().map(|&p| p as f64).sum::<f64>() / n;
    let variance = data.iter().map(|&p| (p as f64 - mean).powi(2)).sum::<f64>() / n;

    let (min, max) = data
        .iter()
        .fold((u8::MAX, u8::MIN), |(lo, hi), &p| (lo.min(p), hi.max(p)));

    Ok(BasicStats {
        mean,
        std_dev: variance.sqrt(),
        max,
        min,
        total: data.len(),
    })
}

impl Report for BasicStats {
    fn record(&self) -> StatisticsRecord {
        StatisticsRecord::new()
            .with("Mean", self.mean)
            .with("Std Dev", self.std_dev)
            .with("Max", self.max)
            .with("Min", self.min)
            .with("Total Pixels", self.total)
    }
}

/// Snapshot of a raw input frame, labelled for reports.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStats {
    /// Frame label, e.g. `"Original"`.
    pub label: &'static str,
    /// Scene description, e.g. `"Static Scene"`.
    pub kind: &'static str,
    /// Intensity statistics of the frame.
    pub stats: BasicStats,
}

impl FrameStats {
    /// Measures `image` and attaches the labels.
    pub fn capture(label: &'static str, kind: &'static str, image: &Image) -> OpResult<Self> {
        Ok(Self {
            label,
            kind,
            stats: basic_statistics(image)?,
        })
    }
}

impl Report for FrameStats {
    fn record(&self) -> StatisticsRecord {
        StatisticsRecord::new()
            .with("Frame", self.label)
            .with("Mean Intensity", self.stats.mean)
            .with("Std Dev", self.stats.std_dev)
            .with("Max", self.stats.max)
            .with("Min", self.stats.min)
            .with("Type", self.kind)
    }
}
