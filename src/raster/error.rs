//! Errors raised by the pixel-operation engines.

use super::Shape;
use thiserror::Error;

/// Errors that can occur while running a core operation.
///
/// All variants are deterministic and caller-correctable; none of them
/// is worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpError {
    /// Operands of a binary operation differ in shape.
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Shape of the first operand.
        expected: Shape,
        /// Shape of the offending operand.
        actual: Shape,
    },
    /// An operand has no samples.
    #[error("image has no samples")]
    EmptyInput,
    /// A scalar parameter is outside its accepted range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Rejected value, formatted.
        value: String,
        /// Accepted range or rule.
        reason: &'static str,
    },
    /// An image could not be reduced to two levels.
    #[error("binarization failed: {0}")]
    BinarizationFailed(String),
}

impl OpError {
    pub(crate) fn invalid(name: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

/// Result alias for core operations.
pub type OpResult<T> = Result<T, OpError>;
