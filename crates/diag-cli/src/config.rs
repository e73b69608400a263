use std::error::Error;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use diag_core::DiagError;
use serde::{Deserialize, Serialize};

/// Output rendering for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `label = value` line per result.
    #[default]
    Text,
    /// Canonical JSON with sorted keys.
    Json,
}

/// YAML-configurable defaults; command line flags take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagConfig {
    /// Bit width of every input line; inferred from the first line when absent.
    pub width: Option<usize>,
    /// Output rendering.
    pub format: OutputFormat,
    /// `tracing` filter directive, e.g. `diag_engine=debug`.
    pub log_filter: Option<String>,
}

pub fn load_config(path: Option<&Path>) -> Result<DiagConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(DiagConfig::default());
    };
    let contents =
        fs::read_to_string(path).map_err(|err| DiagError::io("config-unreadable", path, &err))?;
    let config: DiagConfig = serde_yaml::from_str(&contents)?;
    Ok(config)
}
