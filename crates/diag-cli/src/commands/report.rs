use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use diag_engine::DiagnosticReport;

use super::{render, write_output};
use crate::config::OutputFormat;
use crate::input::{open_session, InputArgs};

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Output rendering; overrides the config file.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Write the report to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &ReportArgs, verbose: bool) -> Result<(), Box<dyn Error>> {
    let session = open_session(&args.input, verbose)?;
    let report = session.engine.diagnose(&session.sequence)?;
    let format = args.format.unwrap_or(session.config.format);
    let rendered = render(format, &report, || text_lines(&report))?;
    match &args.out {
        Some(path) => {
            write_output(path, &rendered)?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn text_lines(report: &DiagnosticReport) -> Vec<String> {
    let power = &report.power;
    let life = &report.life_support;
    vec![
        format!("samples = {} (width {})", report.samples, report.width),
        format!("input hash = {}", report.input_hash),
        format!("gamma rate = {} ({})", power.gamma_rate, power.gamma_bits),
        format!("epsilon rate = {} ({})", power.epsilon_rate, power.epsilon_bits),
        format!("power consumption = {}", power.value),
        format!(
            "oxygen generator rating = {} ({}, {} rounds)",
            life.oxygen.value,
            life.oxygen.bits,
            life.oxygen.rounds.len()
        ),
        format!(
            "co2 scrubber rating = {} ({}, {} rounds)",
            life.co2.value,
            life.co2.bits,
            life.co2.rounds.len()
        ),
        format!("life support rating = {}", life.value),
    ]
}
