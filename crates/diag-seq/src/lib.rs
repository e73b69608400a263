#![deny(missing_docs)]
#![doc = "Owned, indexable sequence of fixed-width bit-strings with line loading, hashing and JSON round-trips."]

/// Canonical content hashing for sequences.
pub mod hash;
/// Construction from raw text lines.
pub mod lines;
/// The sequence container itself.
pub mod sequence;
/// JSON round-trip helpers.
pub mod serde;

pub use hash::canonical_sequence_hash;
pub use lines::{infer_width, sequence_from_lines};
pub use sequence::BitStringSequence;
pub use crate::serde::{from_json, to_json};
