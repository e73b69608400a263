use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args as ClapArgs;
use diag_core::{BitWidth, DiagError};
use diag_engine::DiagnosticEngine;
use diag_seq::{infer_width, sequence_from_lines, BitStringSequence};

use crate::config::{load_config, DiagConfig};
use crate::logging::init_tracing;

/// Options shared by every command that reads a puzzle input.
#[derive(ClapArgs, Debug)]
pub struct InputArgs {
    /// Text file with one bit-string per line.
    #[arg(long = "input", short = 'i')]
    pub input: PathBuf,
    /// Bit width of every line; overrides the config file.
    #[arg(long)]
    pub width: Option<usize>,
    /// Optional YAML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Loaded input plus the effective configuration.
#[derive(Debug)]
pub struct Session {
    pub config: DiagConfig,
    pub sequence: BitStringSequence,
    pub engine: DiagnosticEngine,
}

pub fn open_session(args: &InputArgs, verbose: bool) -> Result<Session, Box<dyn Error>> {
    let mut config = load_config(args.config.as_deref())?;
    init_tracing(config.log_filter.as_deref(), verbose);
    if args.width.is_some() {
        config.width = args.width;
    }

    let contents = fs::read_to_string(&args.input)
        .map_err(|err| DiagError::io("input-unreadable", &args.input, &err))?;
    let width = match config.width {
        Some(bits) => BitWidth::new(bits)?,
        None => infer_width(contents.lines())?,
    };
    let sequence = sequence_from_lines(contents.lines(), width)?;
    tracing::info!(
        path = %args.input.display(),
        samples = sequence.size(),
        width = %width,
        "input loaded"
    );

    Ok(Session {
        config,
        sequence,
        engine: DiagnosticEngine::new(width),
    })
}
