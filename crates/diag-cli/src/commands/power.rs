use std::error::Error;

use clap::Args;

use super::render;
use crate::config::OutputFormat;
use crate::input::{open_session, InputArgs};

#[derive(Args, Debug)]
pub struct PowerArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Output rendering; overrides the config file.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn run(args: &PowerArgs, verbose: bool) -> Result<(), Box<dyn Error>> {
    let session = open_session(&args.input, verbose)?;
    let power = session.engine.power_consumption(&session.sequence)?;
    let format = args.format.unwrap_or(session.config.format);
    let rendered = render(format, &power, || {
        vec![
            format!("gamma rate = {} ({})", power.gamma_rate, power.gamma_bits),
            format!("epsilon rate = {} ({})", power.epsilon_rate, power.epsilon_bits),
            format!("power consumption = {}", power.value),
        ]
    })?;
    println!("{rendered}");
    Ok(())
}
