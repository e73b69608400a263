use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{DiagError, ErrorInfo, Result};

/// Configured number of bits carried by every bit-string of a sequence.
///
/// Widths are bounded by [`BitWidth::MAX`] so that a decoded bit-string always
/// fits in a `u32` and the product of two decoded values fits in a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BitWidth(usize);

impl BitWidth {
    /// Largest supported width.
    pub const MAX: usize = 32;

    /// Creates a width, rejecting zero and anything above [`BitWidth::MAX`].
    pub fn new(bits: usize) -> Result<Self> {
        if bits == 0 || bits > Self::MAX {
            let info = ErrorInfo::new("invalid-width", "bit width must be between 1 and 32")
                .with_context("width", bits)
                .with_hint("check that the input lines are non-empty bit-strings");
            return Err(DiagError::InvalidWidth(info));
        }
        Ok(Self(bits))
    }

    /// Returns the width as a plain count.
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for BitWidth {
    type Error = DiagError;

    fn try_from(bits: usize) -> Result<Self> {
        Self::new(bits)
    }
}

impl From<BitWidth> for usize {
    fn from(width: BitWidth) -> Self {
        width.0
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
