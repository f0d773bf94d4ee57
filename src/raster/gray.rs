//! Grayscale image type shared by every engine.

use super::error::{OpError, OpResult};
use std::fmt;

/// Width and height of an image in samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Samples per row.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Shape {
    /// Creates a shape.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of samples covered by this shape.
    #[inline]
    pub fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An 8-bit grayscale image stored row-major.
///
/// Images are never mutated by the engines: every operation borrows its
/// inputs and returns a freshly allocated result.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Image {
    /// Wraps a pixel buffer, checking that its length matches the dimensions.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> OpResult<Self> {
        let expected = Shape::new(width, height).area();
        if pixels.len() != expected {
            return Err(OpError::invalid(
                "pixels",
                pixels.len(),
                "buffer length does not match width * height",
            ));
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Creates an image with every sample set to `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            pixels: vec![value; Shape::new(width, height).area()],
            width,
            height,
        }
    }

    /// Creates an image by evaluating `f(x, y)` for every sample.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Self {
        let mut pixels = Vec::with_capacity(Shape::new(width, height).area());
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Returns the samples in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image shape.
    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.width, self.height)
    }

    /// Returns the total number of samples (width * height).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Returns true if the image has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Returns the sample at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + x as usize])
    }

    /// Number of samples that are not zero.
    pub fn count_nonzero(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != 0).count()
    }

    /// Fails with [`OpError::EmptyInput`] when the image has no samples.
    pub fn ensure_non_empty(&self) -> OpResult<()> {
        if self.is_empty() {
            return Err(OpError::EmptyInput);
        }
        Ok(())
    }

    /// Fails with [`OpError::ShapeMismatch`] unless `other` has this image's shape.
    pub fn ensure_same_shape(&self, other: &Image) -> OpResult<()> {
        if self.shape() != other.shape() {
            return Err(OpError::ShapeMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }
        Ok(())
    }

    /// Applies `f` to every sample, producing a new image.
    pub(crate) fn map(&self, f: impl Fn(u8) -> u8) -> Image {
        Image {
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Combines two same-shaped images sample by sample.
    ///
    /// Callers check shapes first; the result takes `self`'s dimensions.
    pub(crate) fn zip_map(&self, other: &Image, f: impl Fn(u8, u8) -> u8) -> Image {
        debug_assert_eq!(self.shape(), other.shape());
        Image {
            pixels: self
                .pixels
                .iter()
                .zip(other.pixels.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Wraps a buffer whose length is known to match the dimensions.
    pub(crate) fn from_raw_parts(width: u32, height: u32, pixels: Vec<u8>) -> Image {
        debug_assert_eq!(pixels.len(), Shape::new(width, height).area());
        Image {
            pixels,
            width,
            height,
        }
    }

    /// Builds an image of this shape around a new pixel buffer.
    pub(crate) fn with_pixels(&self, pixels: Vec<u8>) -> Image {
        Image::from_raw_parts(self.width, self.height, pixels)
    }

    /// Copies the samples into an `image::GrayImage`.
    pub fn to_gray_image(&self) -> image::GrayImage {
        image::GrayImage::from_fn(self.width, self.height, |x, y| {
            image::Luma([self.pixels[(y as usize) * (self.width as usize) + x as usize]])
        })
    }
}

impl From<image::GrayImage> for Image {
    fn from(gray: image::GrayImage) -> Self {
        let (width, height) = gray.dimensions();
        Self {
            pixels: gray.into_raw(),
            width,
            height,
        }
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixel_bytes", &self.pixels.len())
            .finish()
    }
}
