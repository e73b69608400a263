use std::fmt;

use diag_core::{BitString, BitWidth, DiagError, ErrorInfo, Result};

/// Ordered, exclusively owned collection of equal-width bit-strings.
///
/// Elements live in contiguous storage. Reads hand out copies, so nothing a
/// caller holds can observe later inserts or removals.
#[derive(Clone, PartialEq, Eq)]
pub struct BitStringSequence {
    width: BitWidth,
    elements: Vec<BitString>,
}

impl BitStringSequence {
    /// Creates an empty sequence whose elements must all be `width` bits wide.
    pub fn new(width: BitWidth) -> Self {
        Self {
            width,
            elements: Vec::new(),
        }
    }

    /// Creates a sequence from already validated bit-strings.
    pub fn from_elements<I>(width: BitWidth, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = BitString>,
    {
        let mut sequence = Self::new(width);
        for value in elements {
            sequence.append(value)?;
        }
        Ok(sequence)
    }

    /// Width shared by every element.
    pub fn width(&self) -> BitWidth {
        self.width
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns true when the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a copy of the element at `pos`.
    pub fn get(&self, pos: usize) -> Result<BitString> {
        self.elements
            .get(pos)
            .cloned()
            .ok_or_else(|| DiagError::out_of_range("get", pos, self.elements.len()))
    }

    /// Appends `value` as the new last element.
    pub fn append(&mut self, value: BitString) -> Result<()> {
        self.check_width(&value)?;
        self.elements.push(value);
        Ok(())
    }

    /// Inserts `value` so that it becomes element `pos`.
    ///
    /// `pos == size` appends. Following elements shift one position later.
    pub fn insert(&mut self, value: BitString, pos: usize) -> Result<()> {
        if pos > self.elements.len() {
            return Err(DiagError::out_of_range(
                "insert",
                pos,
                self.elements.len() + 1,
            ));
        }
        self.check_width(&value)?;
        self.elements.insert(pos, value);
        Ok(())
    }

    /// Removes and returns element `pos`; following elements shift one position earlier.
    pub fn remove(&mut self, pos: usize) -> Result<BitString> {
        if pos >= self.elements.len() {
            return Err(DiagError::out_of_range("remove", pos, self.elements.len()));
        }
        Ok(self.elements.remove(pos))
    }

    /// Returns an independent deep copy of the sequence.
    pub fn duplicate(&self) -> Self {
        tracing::debug!(size = self.size(), width = %self.width, "duplicating sequence");
        self.clone()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, BitString> {
        self.elements.iter()
    }

    /// Keeps only the elements accepted by `keep`, preserving relative order.
    ///
    /// Returns the number of elements removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&BitString) -> bool,
    {
        let before = self.elements.len();
        self.elements.retain(|value| keep(value));
        before - self.elements.len()
    }

    fn check_width(&self, value: &BitString) -> Result<()> {
        if value.width() != self.width.get() {
            let info = ErrorInfo::new(
                "width-mismatch",
                "bit-string width differs from the sequence width",
            )
            .with_context("expected", self.width)
            .with_context("actual", value.width())
            .with_context("value", value);
            return Err(DiagError::WidthMismatch(info));
        }
        Ok(())
    }
}

impl fmt::Debug for BitStringSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitStringSequence")
            .field("width", &self.width)
            .field("elements", &self.elements)
            .finish()
    }
}

impl<'a> IntoIterator for &'a BitStringSequence {
    type Item = &'a BitString;
    type IntoIter = std::slice::Iter<'a, BitString>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
