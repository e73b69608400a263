use std::collections::BTreeMap;
use std::iter::FromIterator;

use diag_core::{DiagError, ErrorInfo, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::report::{DiagnosticReport, REPORT_SCHEMA};

fn serde_error(code: &str, err: impl ToString) -> DiagError {
    DiagError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into JSON bytes with keys sorted at every level.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer_pretty(&mut bytes, &canonical)
        .map_err(|err| serde_error("json-write", err))?;
    Ok(bytes)
}

/// Restores a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-read", err))
}

/// Restores a report, rejecting payloads written under an incompatible schema.
pub fn report_from_json_slice(data: &[u8]) -> Result<DiagnosticReport> {
    let report: DiagnosticReport = from_json_slice(data)?;
    if !REPORT_SCHEMA.is_compatible_with(&report.schema_version) {
        let info = ErrorInfo::new("schema-mismatch", "unsupported report schema version")
            .with_context("expected_major", REPORT_SCHEMA.major)
            .with_context("found_major", report.schema_version.major);
        return Err(DiagError::Serde(info));
    }
    Ok(report)
}
