use anyhow::Result;
use clap::Args;
use resonance_core::classify_footprint;

use super::TextInput;
use crate::output::format::format_footprint;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct FootprintArgs {
    #[command(flatten)]
    pub input: TextInput,
}

pub fn run(args: &FootprintArgs, format: OutputFormat) -> Result<()> {
    let text = args.input.read()?;
    let footprint = classify_footprint(&text);
    let output = format_footprint(&footprint, format);
    println!("{}", output.trim_end());
    Ok(())
}
