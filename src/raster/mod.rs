//! Image and mask types plus the error taxonomy of the engines.

mod error;
mod gray;
mod mask;
mod pair;

pub use gray::{Image, Shape};
pub use error::{OpError, OpResult};
pub use mask::{BinaryMask, BACKGROUND, FOREGROUND};
pub use pair::ImagePair;
