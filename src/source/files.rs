//! Image pairs decoded from files.

use super::SourceError;
use crate::raster::{Image, ImagePair};
use std::path::Path;

/// Largest side accepted from file input; bigger images are shrunk.
pub const MAX_FILE_SIDE: u32 = 400;

fn load_luma(path: &Path) -> Result<Image, SourceError> {
    let decoded = image::open(path).map_err(|source| SourceError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let image = Image::from(decoded.to_luma8());
    if image.is_empty() {
        return Err(SourceError::EmptyImage(path.to_path_buf()));
    }
    tracing::debug!(path = %path.display(), shape = %image.shape(), "Decoded image");
    Ok(image)
}

/// Decodes two files as 8-bit grayscale and resizes both to the
/// smaller of their widths and heights, capped at [`MAX_FILE_SIDE`].
pub fn load_file_pair(first: &Path, second: &Path) -> Result<ImagePair, SourceError> {
    let a = load_luma(first)?;
    let b = load_luma(second)?;

    let width = a.width().min(b.width()).min(MAX_FILE_SIDE);
    let height = a.height().min(b.height()).min(MAX_FILE_SIDE);

    Ok(ImagePair::new(a, b).resized_to(width, height))
}
