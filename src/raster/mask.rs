//! Two-level masks produced by thresholding.

use super::{Image, OpError, OpResult, Shape};

/// Foreground sample value.
pub const FOREGROUND: u8 = 255;
/// Background sample value.
pub const BACKGROUND: u8 = 0;

/// An image whose samples are restricted to {0, 255}.
///
/// The mask remembers the threshold that produced it so that
/// reports can describe how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    image: Image,
    threshold: u8,
}

impl BinaryMask {
    /// Wraps an image that is already two-level.
    pub fn from_image(image: Image, threshold: u8) -> OpResult<Self> {
        if let Some(&bad) = image
            .pixels()
            .iter()
            .find(|&&p| p != FOREGROUND && p != BACKGROUND)
        {
            return Err(OpError::BinarizationFailed(format!(
                "sample value {bad} is neither {BACKGROUND} nor {FOREGROUND}"
            )));
        }
        Ok(Self { image, threshold })
    }

    /// Wraps an image known to be two-level.
    pub(crate) fn new_unchecked(image: Image, threshold: u8) -> Self {
        debug_assert!(image
            .pixels()
            .iter()
            .all(|&p| p == FOREGROUND || p == BACKGROUND));
        Self { image, threshold }
    }

    /// Returns the underlying two-level image.
    #[inline]
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Consumes the mask, returning its image.
    #[inline]
    pub fn into_image(self) -> Image {
        self.image
    }

    /// Threshold used to produce this mask.
    #[inline]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Returns the mask width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Returns the mask height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns the mask shape.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.image.shape()
    }

    /// True when the sample at `(x, y)` is foreground.
    #[inline]
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.image.get(x, y) == Some(FOREGROUND)
    }

    /// Number of foreground samples.
    pub fn foreground_count(&self) -> usize {
        self.image.count_nonzero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_two_level_image() {
        let image = Image::from_fn(4, 4, |x, _| if x < 2 { 0 } else { 255 });
        let mask = BinaryMask::from_image(image, 127).unwrap();

        assert_eq!(mask.foreground_count(), 8);
        assert!(mask.is_foreground(3, 0));
        assert!(!mask.is_foreground(0, 0));
        assert_eq!(mask.threshold(), 127);
    }

    #[test]
    fn test_rejects_gray_samples() {
        let image = Image::filled(2, 2, 128);
        assert!(matches!(
            BinaryMask::from_image(image, 127),
            Err(OpError::BinarizationFailed(_))
        ));
    }
}
