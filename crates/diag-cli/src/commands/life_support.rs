use std::error::Error;

use clap::Args;

use super::render;
use crate::config::OutputFormat;
use crate::input::{open_session, InputArgs};

#[derive(Args, Debug)]
pub struct LifeSupportArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Output rendering; overrides the config file.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn run(args: &LifeSupportArgs, verbose: bool) -> Result<(), Box<dyn Error>> {
    let session = open_session(&args.input, verbose)?;
    let rating = session.engine.life_support(&session.sequence)?;
    let format = args.format.unwrap_or(session.config.format);
    let rendered = render(format, &rating, || {
        vec![
            format!(
                "oxygen generator rating = {} ({})",
                rating.oxygen.value, rating.oxygen.bits
            ),
            format!("co2 scrubber rating = {} ({})", rating.co2.value, rating.co2.bits),
            format!("life support rating = {}", rating.value),
        ]
    })?;
    println!("{rendered}");
    Ok(())
}
