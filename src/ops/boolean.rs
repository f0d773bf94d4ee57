//! Boolean set operations on binarized images.
//!
//! Every operator binarizes its operands with the shared threshold
//! before combining them, so the inputs may be arbitrary grayscale
//! images. Two-operand forms require equal shapes; align the pair with
//! [`ImagePair::aligned`](crate::raster::ImagePair::aligned) first when
//! the sources differ.

use super::{try_binarize, OperationResult};
use crate::raster::{BinaryMask, Image, OpResult, BACKGROUND, FOREGROUND};
use crate::stats::{binary_statistics, BinaryStats};

fn combine(
    a: &Image,
    b: &Image,
    threshold: u8,
    label: &str,
    logic: &'static str,
    op: impl Fn(bool, bool) -> bool,
) -> OpResult<OperationResult<BinaryStats>> {
    let mask_a = try_binarize(a, threshold)?;
    let mask_b = try_binarize(b, threshold)?;
    mask_a.image().ensure_same_shape(mask_b.image())?;

    let combined = mask_a.image().zip_map(mask_b.image(), |x, y| {
        if op(x == FOREGROUND, y == FOREGROUND) {
            FOREGROUND
        } else {
            BACKGROUND
        }
    });
    let mask = BinaryMask::new_unchecked(combined, threshold);
    let stats = binary_statistics(&mask, label, threshold).with_logic(logic);

    tracing::debug!(
        operation = label,
        white = stats.white,
        "Boolean operation computed"
    );
    Ok(OperationResult::new(mask.into_image(), stats, label))
}

/// Foreground where both operands are foreground.
pub fn and(a: &Image, b: &Image, threshold: u8) -> OpResult<OperationResult<BinaryStats>> {
    combine(a, b, threshold, "A AND B", "intersection", |x, y| x && y)
}

/// Foreground where either operand is foreground.
pub fn or(a: &Image, b: &Image, threshold: u8) -> OpResult<OperationResult<BinaryStats>> {
    combine(a, b, threshold, "A OR B", "union", |x, y| x || y)
}

/// Foreground where exactly one operand is foreground.
pub fn xor(a: &Image, b: &Image, threshold: u8) -> OpResult<OperationResult<BinaryStats>> {
    combine(a, b, threshold, "A XOR B", "symmetric difference", |x, y| x != y)
}

/// Complement of the binarized operand.
pub fn not(a: &Image, threshold: u8) -> OpResult<OperationResult<BinaryStats>> {
    let mask = try_binarize(a, threshold)?;
    let inverted = mask.image().map(|p| FOREGROUND - p);
    let mask = BinaryMask::new_unchecked(inverted, threshold);
    let stats = binary_statistics(&mask, "NOT A", threshold).with_logic("complement");

    tracing::debug!(white = stats.white, "Complement computed");
    Ok(OperationResult::new(mask.into_image(), stats, "NOT A"))
}
