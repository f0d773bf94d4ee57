//! Image subtraction with absolute and constant-offset policies.

use super::OperationResult;
use crate::raster::{Image, OpError, OpResult};
use crate::stats::{basic_statistics, percentage, BasicStats, Report, StatisticsRecord};

/// Statistics of an absolute difference.
#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceStats {
    /// Statistics of the difference image.
    pub basic: BasicStats,
    /// Samples whose difference is not zero.
    pub nonzero: usize,
    /// Share of changed samples, in percent.
    pub nonzero_percent: f64,
}

impl Report for DifferenceStats {
    fn record(&self) -> StatisticsRecord {
        self.basic
            .record()
            .with("Pixels >0", self.nonzero)
            .with("Diff %", self.nonzero_percent)
    }
}

/// Statistics of a constant-offset difference.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetStats {
    /// Statistics of the result image.
    pub basic: BasicStats,
    /// Constant added before clipping.
    pub constant: i16,
}

impl OffsetStats {
    /// Achieved `[min, max]` range of the result.
    pub fn range(&self) -> (u8, u8) {
        (self.basic.min, self.basic.max)
    }
}

impl Report for OffsetStats {
    fn record(&self) -> StatisticsRecord {
        let (min, max) = self.range();
        self.basic
            .record()
            .with("Constant", self.constant)
            .with("Range", format!("[{min}, {max}]"))
    }
}

fn check_operands(a: &Image, b: &Image) -> OpResult<()> {
    a.ensure_same_shape(b)?;
    a.ensure_non_empty()
}

/// Computes `|a - b|` per sample.
pub fn absolute_difference(a: &Image, b: &Image) -> OpResult<OperationResult<DifferenceStats>> {
    check_operands(a, b)?;

    let result = a.zip_map(b, |x, y| x.abs_diff(y));
    let basic = basic_statistics(&result)?;
    let nonzero = result.count_nonzero();

    tracing::debug!(shape = %result.shape(), nonzero, "Absolute difference computed");

    let stats = DifferenceStats {
        nonzero_percent: percentage(nonzero, basic.total),
        nonzero,
        basic,
    };
    Ok(OperationResult::new(result, stats, "Absolute Difference |A - B|"))
}

/// Computes `clip(a - b + constant, 0, 255)` per sample.
///
/// The intermediate is held in `i16`, wide enough for `[-510, 510]`, so
/// nothing wraps before the clip.
pub fn offset_difference(
    a: &Image,
    b: &Image,
    constant: i16,
) -> OpResult<OperationResult<OffsetStats>> {
    if !(-255..=255).contains(&constant) {
        return Err(OpError::invalid(
            "constant",
            constant,
            "must lie in [-255, 255]",
        ));
    }
    check_operands(a, b)?;

    let result = a.zip_map(b, |x, y| {
        let wide = x as i16 - y as i16 + constant;
        wide.clamp(0, 255) as u8
    });
    let basic = basic_statistics(&result)?;

    tracing::debug!(
        constant,
        min = basic.min,
        max = basic.max,
        "Offset difference computed"
    );

    let title = format!("Offset Difference (A - B) + {constant}");
    Ok(OperationResult::new(result, OffsetStats { basic, constant }, title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatValue;

    #[test]
    fn test_absolute_difference_values() {
        let a = Image::from_pixels(2, 2, vec![10, 200, 0, 255]).unwrap();
        let b = Image::from_pixels(2, 2, vec![30, 100, 0, 0]).unwrap();

        let result = absolute_difference(&a, &b).unwrap();
        assert_eq!(result.image.pixels(), &[20, 100, 0, 255]);
        assert_eq!(result.stats.nonzero, 3);
        assert!((result.stats.nonzero_percent - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_identical_images_have_no_difference() {
        let a = Image::from_fn(16, 16, |x, y| (x * y) as u8);
        let result = absolute_difference(&a, &a).unwrap();

        assert!(result.image.pixels().iter().all(|&p| p == 0));
        assert_eq!(result.stats.nonzero_percent, 0.0);
    }

    #[test]
    fn test_shape_mismatch_fails() {
        let a = Image::filled(4, 4, 0);
        let b = Image::filled(5, 4, 0);

        assert!(matches!(
            absolute_difference(&a, &b),
            Err(OpError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            offset_difference(&a, &b, 100),
            Err(OpError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_operands_fail() {
        let a = Image::filled(0, 0, 0);
        assert_eq!(absolute_difference(&a, &a).unwrap_err(), OpError::EmptyInput);
    }

    #[test]
    fn test_offset_difference_clips_both_ends() {
        let a = Image::from_pixels(3, 1, vec![0, 255, 50]).unwrap();
        let b = Image::from_pixels(3, 1, vec![255, 0, 50]).unwrap();

        let result = offset_difference(&a, &b, 100).unwrap();
        // 0-255+100 -> 0, 255-0+100 -> 255, 50-50+100 -> 100
        assert_eq!(result.image.pixels(), &[0, 255, 100]);
        assert_eq!(result.stats.range(), (0, 255));
        assert_eq!(result.title, "Offset Difference (A - B) + 100");
    }

    #[test]
    fn test_offset_record_echoes_constant() {
        let a = Image::filled(4, 4, 120);
        let b = Image::filled(4, 4, 100);

        let record = offset_difference(&a, &b, 150).unwrap().record();
        assert_eq!(record.get("Constant"), Some(&StatValue::Int(150)));
        assert_eq!(record.get("Range"), Some(&StatValue::from("[170, 170]")));
    }

    #[test]
    fn test_offset_out_of_range_rejected() {
        let a = Image::filled(2, 2, 0);
        assert!(matches!(
            offset_difference(&a, &a, 300),
            Err(OpError::InvalidParameter { name: "constant", .. })
        ));
    }
}
