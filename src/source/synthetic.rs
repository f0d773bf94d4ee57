//! Synthetic image pairs drawn from simple filled shapes.

use crate::raster::{Image, ImagePair};

/// Side length of the synthetic images.
pub const SYNTHETIC_SIZE: u32 = 300;

/// A mutable drawing surface that is frozen into an [`Image`].
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Creates a black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Creates a canvas holding a copy of `image`.
    pub fn from_image(image: &Image) -> Self {
        Self {
            pixels: image.pixels().to_vec(),
            width: image.width(),
            height: image.height(),
        }
    }

    fn put(&mut self, x: i64, y: i64, value: u8) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.pixels[(y as usize) * (self.width as usize) + x as usize] = value;
    }

    /// Fills the rectangle with inclusive corners `(x0, y0)` and `(x1, y1)`.
    pub fn fill_rect(mut self, (x0, y0): (i64, i64), (x1, y1): (i64, i64), value: u8) -> Self {
        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                self.put(x, y, value);
            }
        }
        self
    }

    /// Fills every sample within `radius` of `(cx, cy)`.
    pub fn fill_circle(mut self, (cx, cy): (i64, i64), radius: i64, value: u8) -> Self {
        let r2 = radius * radius;
        for y in cy - radius..=cy + radius {
            for x in cx - radius..=cx + radius {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, value);
                }
            }
        }
        self
    }

    /// Freezes the canvas into an image.
    pub fn into_image(self) -> Image {
        Image::from_raw_parts(self.width, self.height, self.pixels)
    }
}

/// Two unrelated geometric scenes for subtraction, Boolean, and blend demos.
pub fn synthetic_pair() -> ImagePair {
    let first = Canvas::new(SYNTHETIC_SIZE, SYNTHETIC_SIZE)
        .fill_rect((50, 50), (150, 150), 255)
        .fill_circle((200, 200), 40, 128)
        .into_image();
    let second = Canvas::new(SYNTHETIC_SIZE, SYNTHETIC_SIZE)
        .fill_circle((100, 100), 50, 255)
        .fill_rect((180, 180), (280, 280), 192)
        .into_image();

    tracing::debug!("Synthetic pair created");
    ImagePair::new(first, second)
}

/// A static scene and a copy in which two shapes moved and one appeared.
pub fn motion_demo_pair() -> ImagePair {
    let first = Canvas::new(SYNTHETIC_SIZE, SYNTHETIC_SIZE)
        .fill_rect((50, 50), (150, 150), 128)
        .fill_circle((200, 200), 30, 255)
        .into_image();
    let second = Canvas::from_image(&first)
        .fill_rect((70, 70), (170, 170), 128)
        .fill_circle((180, 180), 30, 255)
        .fill_rect((250, 250), (290, 290), 192)
        .into_image();

    tracing::debug!("Motion demo frames created");
    ImagePair::new(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_is_inclusive() {
        let image = Canvas::new(10, 10).fill_rect((2, 3), (4, 5), 9).into_image();
        assert_eq!(image.count_nonzero(), 9);
        assert_eq!(image.get(4, 5), Some(9));
        assert_eq!(image.get(5, 5), Some(0));
    }

    #[test]
    fn test_fill_circle_clips_at_border() {
        let image = Canvas::new(10, 10).fill_circle((0, 0), 2, 1).into_image();
        // Quarter disc: (0,0) (1,0) (2,0) (0,1) (1,1) (0,2)
        assert_eq!(image.count_nonzero(), 6);
    }

    #[test]
    fn test_synthetic_pair_shapes() {
        let pair = synthetic_pair();
        assert!(pair.is_aligned());
        assert_eq!(pair.first.width(), SYNTHETIC_SIZE);
        assert_eq!(pair.first.get(100, 100), Some(255));
        assert_eq!(pair.first.get(200, 200), Some(128));
        assert_eq!(pair.second.get(230, 230), Some(192));
    }

    #[test]
    fn test_motion_demo_frames_differ() {
        let pair = motion_demo_pair();
        assert_eq!(pair.first.get(270, 270), Some(0));
        assert_eq!(pair.second.get(270, 270), Some(192));
        assert_eq!(pair.first.get(60, 60), pair.second.get(60, 60));
    }
}
