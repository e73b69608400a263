use sha2::{Digest, Sha256};

use crate::sequence::BitStringSequence;

/// Computes the canonical content hash of a sequence.
///
/// The digest covers the width, the element count and every element in
/// order, so two sequences hash equal exactly when they compare equal.
pub fn canonical_sequence_hash(sequence: &BitStringSequence) -> String {
    let mut hasher = Sha256::new();
    hasher.update((sequence.width().get() as u64).to_le_bytes());
    hasher.update((sequence.size() as u64).to_le_bytes());
    for value in sequence {
        hasher.update(value.as_str().as_bytes());
    }
    hex::encode(hasher.finalize())
}
