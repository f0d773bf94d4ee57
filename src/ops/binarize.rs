//! Fixed-threshold binarization.

use crate::raster::{BinaryMask, Image, OpError, OpResult, BACKGROUND, FOREGROUND};

/// Maps each sample to 255 if it is strictly greater than `threshold`,
/// else 0. A sample equal to the threshold becomes background.
pub fn binarize(image: &Image, threshold: u8) -> BinaryMask {
    let binary = image.map(|p| if p > threshold { FOREGROUND } else { BACKGROUND });
    BinaryMask::new_unchecked(binary, threshold)
}

/// Checked form of [`binarize`] that refuses degenerate input.
pub fn try_binarize(image: &Image, threshold: u8) -> OpResult<BinaryMask> {
    if image.is_empty() {
        return Err(OpError::BinarizationFailed(format!(
            "cannot binarize a {} image",
            image.shape()
        )));
    }
    Ok(binarize(image, threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary_is_background() {
        let image = Image::from_pixels(4, 1, vec![0, 127, 128, 255]).unwrap();
        let mask = binarize(&image, 127);

        assert_eq!(mask.image().pixels(), &[0, 0, 255, 255]);
        assert_eq!(mask.threshold(), 127);
    }

    #[test]
    fn test_max_threshold_gives_empty_mask() {
        let image = Image::filled(4, 4, 255);
        assert_eq!(binarize(&image, 255).foreground_count(), 0);
    }

    #[test]
    fn test_try_binarize_rejects_empty() {
        let image = Image::filled(0, 7, 0);
        assert!(matches!(
            try_binarize(&image, 127),
            Err(OpError::BinarizationFailed(_))
        ));
    }
}
