use std::error::Error;
use std::fs;
use std::path::Path;

use diag_engine::serde::to_canonical_json_bytes;
use serde::Serialize;

use crate::config::OutputFormat;

pub mod life_support;
pub mod power;
pub mod report;
pub mod version;

/// Renders `value` as canonical JSON or as the given text lines.
pub(crate) fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> Vec<String>,
) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Text => Ok(text().join("\n")),
        OutputFormat::Json => Ok(String::from_utf8(to_canonical_json_bytes(value)?)?),
    }
}

pub(crate) fn write_output(path: &Path, rendered: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{rendered}\n"))?;
    Ok(())
}
