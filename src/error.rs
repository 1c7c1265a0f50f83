//! Errors of the adapters around the distance transform.
//! Computing a field itself cannot fail.

use std::fmt;

/// Errors arising when building a mask from untrusted nested rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// The rows do not all have the same length.
    JaggedRows {
        /// Index of the first row whose length differs from the first row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A dimension does not fit into the `u16` coordinates of a binary image.
    TooLarge {
        width: usize,
        height: usize,
    },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JaggedRows { row, expected, found } => write!(
                f, "mask is not rectangular: row {} has {} cells, expected {}",
                row, found, expected
            ),
            Self::TooLarge { width, height } => write!(
                f, "mask of {}x{} cells exceeds the maximum of {}x{}",
                width, height, u16::MAX, u16::MAX
            ),
        }
    }
}

impl std::error::Error for MaskError {}


/// Errors arising when encoding a distance field into bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// The distance range used for normalization is empty or not finite.
    InvalidRange {
        min: f32,
        max: f32,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "invalid normalization range: {} to {}", min, max)
            }
        }
    }
}

impl std::error::Error for EncodeError {}
