//! Structured error types shared across the diagnostic crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`DiagError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (indices, sizes, line numbers).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the diagnostic crates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", content = "detail")]
pub enum DiagError {
    /// A position argument fell outside the valid bounds of a sequence or bit-string.
    #[error("out of range: {0}")]
    OutOfRange(ErrorInfo),
    /// A computation that needs at least one element was given none.
    #[error("empty sequence: {0}")]
    EmptySequence(ErrorInfo),
    /// The convergence loop ran out of positions with several candidates left.
    #[error("ambiguous reduction: {0}")]
    AmbiguousReduction(ErrorInfo),
    /// A character outside `{'0', '1'}` was found where a bit was expected.
    #[error("malformed bit-string: {0}")]
    MalformedBitString(ErrorInfo),
    /// A bit-string does not have the width configured for its sequence.
    #[error("width mismatch: {0}")]
    WidthMismatch(ErrorInfo),
    /// A width outside the supported range was requested.
    #[error("invalid width: {0}")]
    InvalidWidth(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// An input or configuration file could not be read.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl DiagError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            DiagError::OutOfRange(info)
            | DiagError::EmptySequence(info)
            | DiagError::AmbiguousReduction(info)
            | DiagError::MalformedBitString(info)
            | DiagError::WidthMismatch(info)
            | DiagError::InvalidWidth(info)
            | DiagError::Serde(info)
            | DiagError::Io(info) => info,
        }
    }

    /// Builds the out-of-range error shared by every positional accessor.
    pub fn out_of_range(operation: &str, index: usize, bound: usize) -> Self {
        let info = ErrorInfo::new("index-out-of-range", format!("{operation} index out of range"))
            .with_context("operation", operation)
            .with_context("index", index)
            .with_context("bound", bound);
        DiagError::OutOfRange(info)
    }

    /// Wraps a failed file read, recording the path.
    pub fn io(code: &str, path: &Path, err: &std::io::Error) -> Self {
        let info = ErrorInfo::new(code, err.to_string()).with_context("path", path.display());
        DiagError::Io(info)
    }
}

/// Result alias used throughout the diagnostic crates.
pub type Result<T> = std::result::Result<T, DiagError>;
