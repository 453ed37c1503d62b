//! Error types for orientation parsing.

use thiserror::Error;

/// Result type for rotation operations.
pub type RotationResult<T> = Result<T, RotationError>;

/// Errors that can occur while describing a rotation.
///
/// Degenerate inputs (zero axes, non-unit quaternions, unknown single-axis
/// labels) are never errors: the rotation routines fall back to a defined
/// value instead. Only textual configuration is validated here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    /// An axis-order string could not be parsed.
    #[error("invalid axis order {order:?}: {reason}")]
    InvalidAxisOrder {
        /// The rejected axis-order string.
        order: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A rotation method name is not one of the known methods.
    #[error("unknown rotation method {name:?}")]
    UnknownMethod {
        /// The rejected method name.
        name: String,
    },
}

impl RotationError {
    pub(crate) fn invalid_order(order: &str, reason: &'static str) -> Self {
        Self::InvalidAxisOrder {
            order: order.to_owned(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_rejected_order() {
        let err = RotationError::invalid_order("xyy", "consecutive axes must differ");
        assert_eq!(
            err.to_string(),
            "invalid axis order \"xyy\": consecutive axes must differ"
        );
    }

    #[test]
    fn display_unknown_method() {
        let err = RotationError::UnknownMethod {
            name: "Slerp".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown rotation method \"Slerp\"");
    }
}
