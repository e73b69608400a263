use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    life_support::{self, LifeSupportArgs},
    power::{self, PowerArgs},
    report::{self, ReportArgs},
    version::{self, VersionArgs},
};

mod commands;
mod config;
mod input;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "bitdiag", about = "Binary diagnostic report CLI")]
struct Cli {
    /// Raise the default log level to debug.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute gamma and epsilon rates and the power consumption.
    Power(PowerArgs),
    /// Compute oxygen and CO2 ratings and the life support rating.
    LifeSupport(LifeSupportArgs),
    /// Run every computation and emit the full diagnostic report.
    Report(ReportArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Power(args) => power::run(&args, cli.verbose),
        Command::LifeSupport(args) => life_support::run(&args, cli.verbose),
        Command::Report(args) => report::run(&args, cli.verbose),
        Command::Version(args) => {
            logging::init_tracing(None, cli.verbose);
            version::run(&args)
        }
    }
}
