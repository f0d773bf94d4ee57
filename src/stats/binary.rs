//! Foreground/background counts for binary masks.

use super::record::{Report, StatisticsRecord};
use crate::raster::{BinaryMask, Shape};

/// Statistics of a two-level mask.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryStats {
    /// Foreground samples.
    pub white: usize,
    /// Background samples.
    pub black: usize,
    /// `white / total * 100`, or 0 for an empty mask.
    pub white_percent: f64,
    /// Binarization threshold.
    pub threshold: u8,
    /// Operation label, e.g. `"A AND B"`.
    pub operation: String,
    /// Mask shape.
    pub shape: Shape,
    /// Set-theoretic reading of the operation, when there is one.
    pub logic: Option<&'static str>,
}

impl BinaryStats {
    /// Attaches the set-theoretic reading of the operation.
    pub fn with_logic(mut self, logic: &'static str) -> Self {
        self.logic = Some(logic);
        self
    }

    /// Returns the number of samples counted.
    pub fn total(&self) -> usize {
        self.white + self.black
    }
}

/// Counts foreground and background samples of `mask`.
pub fn binary_statistics(mask: &BinaryMask, operation: &str, threshold: u8) -> BinaryStats {
    let total = mask.image().pixel_count();
    let white = mask.foreground_count();

    BinaryStats {
        white,
        black: total - white,
        white_percent: percentage(white, total),
        threshold,
        operation: operation.to_owned(),
        shape: mask.shape(),
        logic: None,
    }
}

/// `part / total * 100`, guarded against an empty total.
pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64) * 100.0
}

/// Formats a threshold the way reports show it.
pub(crate) fn threshold_descriptor(threshold: u8) -> String {
    format!("{threshold}/255")
}

impl Report for BinaryStats {
    fn record(&self) -> StatisticsRecord {
        let record = StatisticsRecord::new()
            .with("White Pixels", self.white)
            .with("Black Pixels", self.black)
            .with("White %", self.white_percent)
            .with("Threshold", threshold_descriptor(self.threshold))
            .with("Operation", self.operation.as_str())
            .with("Size", self.shape.to_string());

        match self.logic {
            Some(logic) => record.with("Logic", logic),
            None => record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Image;
    use crate::stats::StatValue;

    #[test]
    fn test_counts_and_percentage() {
        let image = Image::from_fn(8, 4, |x, _| if x < 2 { 255 } else { 0 });
        let mask = BinaryMask::from_image(image, 127).unwrap();

        let stats = binary_statistics(&mask, "Binary A", 127);
        assert_eq!(stats.white, 8);
        assert_eq!(stats.black, 24);
        assert!((stats.white_percent - 25.0).abs() < 1e-9);

        let record = stats.record();
        assert_eq!(record.get("Threshold"), Some(&StatValue::from("127/255")));
        assert_eq!(record.get("Size"), Some(&StatValue::from("8x4")));
        assert_eq!(record.get("Logic"), None);
    }

    #[test]
    fn test_empty_mask_has_zero_percentage() {
        let mask = BinaryMask::from_image(Image::filled(0, 3, 0), 127).unwrap();
        let stats = binary_statistics(&mask, "empty", 127);

        assert_eq!(stats.total(), 0);
        assert_eq!(stats.white_percent, 0.0);
    }

    #[test]
    fn test_logic_is_reported_last() {
        let mask = BinaryMask::from_image(Image::filled(2, 2, 255), 10).unwrap();
        let record = binary_statistics(&mask, "A OR B", 10)
            .with_logic("union")
            .record();

        let last = record.iter().last().unwrap();
        assert_eq!(last, ("Logic", &StatValue::from("union")));
    }
}
