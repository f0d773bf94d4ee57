//! Binary morphology with a 3x3 square neighborhood.
//!
//! Windows are clamped at the image border, so samples outside the
//! image never take part: the border neither erodes nor dilates.

use crate::raster::BinaryMask;

/// Half-width of the square structuring neighborhood.
const RADIUS: usize = 1;

fn filter(mask: &BinaryMask, pick: impl Fn(u8, u8) -> u8, init: u8) -> BinaryMask {
    let w = mask.width() as usize;
    let h = mask.height() as usize;
    let src = mask.image().pixels();
    let mut out = vec![init; w * h];

    for y in 0..h {
        for x in 0..w {
            let mut acc = init;
            for ny in y.saturating_sub(RADIUS)..=(y + RADIUS).min(h - 1) {
                for nx in x.saturating_sub(RADIUS)..=(x + RADIUS).min(w - 1) {
                    acc = pick(acc, src[ny * w + nx]);
                }
            }
            out[y * w + x] = acc;
        }
    }

    BinaryMask::new_unchecked(mask.image().with_pixels(out), mask.threshold())
}

/// A sample becomes foreground if any neighbor is foreground.
pub fn dilate(mask: &BinaryMask) -> BinaryMask {
    if mask.image().is_empty() {
        return mask.clone();
    }
    filter(mask, u8::max, u8::MIN)
}

/// A sample stays foreground only if every neighbor is foreground.
pub fn erode(mask: &BinaryMask) -> BinaryMask {
    if mask.image().is_empty() {
        return mask.clone();
    }
    filter(mask, u8::min, u8::MAX)
}

/// Dilation followed by erosion: bridges gaps between nearby regions.
pub fn close(mask: &BinaryMask) -> BinaryMask {
    erode(&dilate(mask))
}

/// Erosion followed by dilation: removes isolated specks.
pub fn open(mask: &BinaryMask) -> BinaryMask {
    dilate(&erode(mask))
}
