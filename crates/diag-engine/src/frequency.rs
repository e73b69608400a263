use diag_core::{BitString, DiagError, ErrorInfo, Result};
use diag_seq::BitStringSequence;

/// Per-position counts of `'1'` bits over one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyVector {
    ones: Vec<usize>,
    samples: usize,
}

impl FrequencyVector {
    /// Count of `'1'` bits at every position, most significant first.
    pub fn ones(&self) -> &[usize] {
        &self.ones
    }

    /// Number of bit-strings that were counted.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Derives the majority bit-string; exact ties resolve to `'1'`.
    pub fn majority(&self) -> Result<BitString> {
        if self.samples == 0 {
            let info = ErrorInfo::new(
                "empty-sequence",
                "majority bits are undefined for an empty sequence",
            )
            .with_context("width", self.ones.len());
            return Err(DiagError::EmptySequence(info));
        }
        // count / samples >= 0.5, kept in integers.
        BitString::from_bits(self.ones.iter().map(|&count| 2 * count >= self.samples))
    }
}

/// Counts the `'1'` bits at every position across the sequence.
pub fn bit_frequencies(sequence: &BitStringSequence) -> FrequencyVector {
    let mut ones = vec![0usize; sequence.width().get()];
    for value in sequence {
        for (slot, bit) in ones.iter_mut().zip(value.bits()) {
            *slot += usize::from(bit);
        }
    }
    tracing::trace!(?ones, samples = sequence.size(), "bit frequencies");
    FrequencyVector {
        ones,
        samples: sequence.size(),
    }
}

/// Computes the per-position majority bit-string of a non-empty sequence.
pub fn majority_bits(sequence: &BitStringSequence) -> Result<BitString> {
    bit_frequencies(sequence).majority()
}
