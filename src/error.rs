//! Error types for curve conversions and traversals.

use thiserror::Error;

/// A precondition of a curve operation was violated.
///
/// All variants are raised before any output is written, so a failed call
/// leaves its output arguments untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// The side length is zero, not a power of two, or too large.
    #[error("grid side must be a power of two in [1, 2^31], got {0}")]
    NotPowerOfTwo(u64),

    /// A coordinate lies outside the grid.
    #[error("coordinate ({x}, {y}) is outside a grid of side {side}")]
    CoordinateOutOfRange { x: u64, y: u64, side: u32 },

    /// A curve index lies outside `[0, side^2)`.
    #[error("curve index {index} is outside a grid of side {side}")]
    IndexOutOfRange { index: u64, side: u32 },

    /// A lookup table maps a curve index to a cell the curve does not visit
    /// at that index.
    #[error("table maps curve index {index} to ({x}, {y}), which is not its cell")]
    NotOnCurve { index: u64, x: u32, y: u32 },

    /// A slice argument does not have the length the grid requires.
    #[error("{what} has length {actual}, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A textual grid size could not be understood.
    #[error("cannot parse grid size: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, CurveError>;

/// Fails with [`CurveError::LengthMismatch`] unless `actual == expected`.
pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        Err(CurveError::LengthMismatch {
            what,
            expected,
            actual,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CurveError::NotPowerOfTwo(6).to_string(),
            "grid side must be a power of two in [1, 2^31], got 6"
        );
        assert_eq!(
            CurveError::CoordinateOutOfRange { x: 4, y: 0, side: 4 }.to_string(),
            "coordinate (4, 0) is outside a grid of side 4"
        );
        assert_eq!(
            CurveError::NotOnCurve { index: 1, x: 1, y: 1 }.to_string(),
            "table maps curve index 1 to (1, 1), which is not its cell"
        );
        assert_eq!(
            check_len("vector", 8, 7).unwrap_err().to_string(),
            "vector has length 7, expected 8"
        );
        assert!(check_len("vector", 8, 8).is_ok());
    }
}
