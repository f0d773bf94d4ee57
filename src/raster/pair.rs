//! Operand pairs and the resize-to-match policy.
//!
//! The engines require equal shapes and fail otherwise. Callers that
//! want the second operand stretched to the first one's shape run
//! [`ImagePair::aligned`] before calling into the engines; this is the
//! only place resizing happens.

use super::Image;
use image::imageops::{self, FilterType};

/// Two images that take part in a binary operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePair {
    /// Operand A; its shape wins on alignment.
    pub first: Image,
    /// Operand B.
    pub second: Image,
}

impl ImagePair {
    /// Pairs two images without touching them.
    pub fn new(first: Image, second: Image) -> Self {
        Self { first, second }
    }

    /// True when both images share the same shape.
    pub fn is_aligned(&self) -> bool {
        self.first.shape() == self.second.shape()
    }

    /// Resizes the second image to the first image's shape.
    ///
    /// Uses bilinear filtering. Empty images are left untouched so that
    /// the engines can report them as empty input.
    pub fn aligned(self) -> Self {
        if self.is_aligned() || self.first.is_empty() || self.second.is_empty() {
            return self;
        }

        let target = self.first.shape();
        tracing::debug!(
            from = %self.second.shape(),
            to = %target,
            "Resizing second operand to match first"
        );
        let resized = imageops::resize(
            &self.second.to_gray_image(),
            target.width,
            target.height,
            FilterType::Triangle,
        );

        Self {
            first: self.first,
            second: Image::from(resized),
        }
    }

    /// Resizes both images to `width` x `height`.
    pub fn resized_to(self, width: u32, height: u32) -> Self {
        let resize = |image: Image| {
            if image.width() == width && image.height() == height {
                return image;
            }
            Image::from(imageops::resize(
                &image.to_gray_image(),
                width,
                height,
                FilterType::Triangle,
            ))
        };
        Self {
            first: resize(self.first),
            second: resize(self.second),
        }
    }
}
