use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{DiagError, ErrorInfo, Result};
use crate::width::BitWidth;

/// Fixed-width string over the alphabet `{'0', '1'}`.
///
/// Every constructor validates the alphabet and the width, so a `BitString`
/// in hand is always well formed. Bits are stored as their ASCII characters.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BitString {
    bits: Box<[u8]>,
}

impl BitString {
    /// Parses `text` and checks that it carries exactly `width` bits.
    pub fn parse(text: &str, width: BitWidth) -> Result<Self> {
        let bits = Self::parse_unsized(text)?;
        if bits.width() != width.get() {
            let info = ErrorInfo::new(
                "width-mismatch",
                "bit-string length does not match the configured width",
            )
            .with_context("expected", width)
            .with_context("actual", bits.width());
            return Err(DiagError::WidthMismatch(info));
        }
        Ok(bits)
    }

    fn parse_unsized(text: &str) -> Result<Self> {
        if let Some((offset, ch)) = text.char_indices().find(|&(_, ch)| ch != '0' && ch != '1') {
            let info = ErrorInfo::new("invalid-bit", "bit-strings may only contain '0' and '1'")
                .with_context("offset", offset)
                .with_context("character", format!("{ch:?}"));
            return Err(DiagError::MalformedBitString(info));
        }
        BitWidth::new(text.len())?;
        Ok(Self {
            bits: text.as_bytes().into(),
        })
    }

    /// Builds a bit-string from booleans, most significant bit first.
    pub fn from_bits<I>(bits: I) -> Result<Self>
    where
        I: IntoIterator<Item = bool>,
    {
        let bits: Vec<u8> = bits
            .into_iter()
            .map(|bit| if bit { b'1' } else { b'0' })
            .collect();
        BitWidth::new(bits.len())?;
        Ok(Self {
            bits: bits.into_boxed_slice(),
        })
    }

    /// Number of bits held.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Returns the bit at `pos` (`true` for `'1'`).
    pub fn bit(&self, pos: usize) -> Result<bool> {
        self.bits
            .get(pos)
            .map(|&byte| byte == b'1')
            .ok_or_else(|| DiagError::out_of_range("bit", pos, self.bits.len()))
    }

    /// Iterates over the bits, most significant first.
    pub fn bits(&self) -> impl ExactSizeIterator<Item = bool> + '_ {
        self.bits.iter().map(|&byte| byte == b'1')
    }

    /// Returns the textual form, e.g. `"10110"`.
    pub fn as_str(&self) -> &str {
        // Only b'0' and b'1' are ever stored.
        std::str::from_utf8(&self.bits).unwrap_or_default()
    }

    /// Returns a copy with every bit flipped.
    pub fn inverted(&self) -> Self {
        let bits = self
            .bits
            .iter()
            .map(|&byte| if byte == b'1' { b'0' } else { b'1' })
            .collect();
        Self { bits }
    }

    /// Decodes the bits as an unsigned base-2 integer.
    pub fn to_u32(&self) -> u32 {
        self.bits()
            .fold(0u32, |acc, bit| (acc << 1) | u32::from(bit))
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BitString").field(&self.as_str()).finish()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a bit-string whose width is taken from the text itself.
impl FromStr for BitString {
    type Err = DiagError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse_unsized(text)
    }
}

impl TryFrom<String> for BitString {
    type Error = DiagError;

    fn try_from(text: String) -> Result<Self> {
        text.parse()
    }
}

impl From<BitString> for String {
    fn from(bits: BitString) -> Self {
        bits.as_str().to_owned()
    }
}
