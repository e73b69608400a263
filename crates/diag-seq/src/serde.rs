use diag_core::{BitString, BitWidth, DiagError, ErrorInfo, Result, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::sequence::BitStringSequence;

/// Schema written alongside serialized sequences.
pub const SEQUENCE_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

#[derive(Debug, Serialize, Deserialize)]
struct SerializableSequence {
    schema_version: SchemaVersion,
    width: BitWidth,
    elements: Vec<BitString>,
}

fn serde_error(code: &str, err: impl ToString) -> DiagError {
    DiagError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serializes a sequence to a JSON string.
pub fn to_json(sequence: &BitStringSequence) -> Result<String> {
    let payload = SerializableSequence {
        schema_version: SEQUENCE_SCHEMA,
        width: sequence.width(),
        elements: sequence.iter().cloned().collect(),
    };
    serde_json::to_string_pretty(&payload).map_err(|err| serde_error("json-encode", err))
}

/// Restores a sequence from JSON, re-validating every element against the stored width.
pub fn from_json(json: &str) -> Result<BitStringSequence> {
    let payload: SerializableSequence =
        serde_json::from_str(json).map_err(|err| serde_error("json-decode", err))?;
    if !SEQUENCE_SCHEMA.is_compatible_with(&payload.schema_version) {
        let info = ErrorInfo::new("schema-mismatch", "unsupported sequence schema version")
            .with_context("expected_major", SEQUENCE_SCHEMA.major)
            .with_context("found_major", payload.schema_version.major);
        return Err(DiagError::Serde(info));
    }
    BitStringSequence::from_elements(payload.width, payload.elements)
}
