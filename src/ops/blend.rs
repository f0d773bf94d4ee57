//! Alpha blending of two images.

use super::OperationResult;
use crate::raster::{Image, OpError, OpResult};
use crate::stats::{basic_statistics, BasicStats, Report, StatisticsRecord};

/// Statistics of a blend, including a check of the linear-combination
/// invariant on the means.
#[derive(Debug, Clone, PartialEq)]
pub struct BlendStats {
    /// Statistics of the first input.
    pub first: BasicStats,
    /// Statistics of the second input.
    pub second: BasicStats,
    /// Statistics of the blended image.
    pub result: BasicStats,
    /// Weight of the first input.
    pub alpha: f64,
    /// `alpha * mean(a) + (1 - alpha) * mean(b)`.
    pub expected_mean: f64,
}

impl BlendStats {
    /// Weight of the second image.
    pub fn beta(&self) -> f64 {
        1.0 - self.alpha
    }

    /// Absolute gap between the expected and the achieved mean.
    ///
    /// Bounded by the 0.5 rounding step of the 8-bit narrowing.
    pub fn mean_error(&self) -> f64 {
        (self.result.mean - self.expected_mean).abs()
    }

    /// Human-readable mixing ratio, e.g. `"30% A + 70% B"`.
    pub fn ratio(&self) -> String {
        let a = (self.alpha * 100.0).round() as u32;
        format!("{a}% A + {}% B", 100 - a)
    }
}

impl Report for BlendStats {
    fn record(&self) -> StatisticsRecord {
        StatisticsRecord::new()
            .with("Mean A", self.first.mean)
            .with("Mean B", self.second.mean)
            .with("Std A", self.first.std_dev)
            .with("Std B", self.second.std_dev)
            .with("Alpha", self.alpha)
            .with("Beta", self.beta())
            .with("Mean Result", self.result.mean)
            .with("Expected Mean", self.expected_mean)
            .with("Mean Error", self.mean_error())
            .with("Std Dev", self.result.std_dev)
            .with("Max", self.result.max)
            .with("Min", self.result.min)
            .with("Blend Ratio", self.ratio())
    }
}

/// Computes `alpha * a + (1 - alpha) * b` per sample.
///
/// The sum is evaluated in `f64`, rounded to the nearest integer, and
/// clipped to `[0, 255]`.
pub fn blend(a: &Image, b: &Image, alpha: f64) -> OpResult<OperationResult<BlendStats>> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(OpError::invalid("alpha", alpha, "must lie in [0, 1]"));
    }
    a.ensure_same_shape(b)?;
    a.ensure_non_empty()?;

    let beta = 1.0 - alpha;
    let result = a.zip_map(b, |x, y| {
        let mixed = alpha * x as f64 + beta * y as f64;
        mixed.round().clamp(0.0, 255.0) as u8
    });

    let first = basic_statistics(a)?;
    let second = basic_statistics(b)?;
    let stats = BlendStats {
        expected_mean: alpha * first.mean + beta * second.mean,
        result: basic_statistics(&result)?,
        first,
        second,
        alpha,
    };

    tracing::debug!(
        alpha,
        mean_error = stats.mean_error(),
        "Blend computed"
    );

    let title = format!("Blended Result ({})", stats.ratio());
    Ok(OperationResult::new(result, stats, title))
}
