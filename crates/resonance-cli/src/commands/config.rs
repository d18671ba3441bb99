use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use resonance_core::ResonanceConfig;

use crate::output::OutputFormat;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the effective config to this file
    #[arg(long)]
    pub write: Option<PathBuf>,
}

pub fn run(args: &ConfigArgs, config: &ResonanceConfig, format: OutputFormat) -> Result<()> {
    if let Some(path) = &args.write {
        config
            .save(path)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Wrote config to {}", path.display());
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Text => {
            println!("poetic_threshold:      {}", config.poetic_threshold);
            println!("echo_depth_ceiling:    {}", config.echo_depth_ceiling);
            println!("max_scroll_age_ms:     {}", config.max_scroll_age_ms);
            println!("drift_ledger_capacity: {}", config.drift_ledger_capacity);
            println!("drift_window:          {}", config.drift_window);
            println!(
                "offering_log_capacity: {}",
                config
                    .offering_log_capacity
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "unbounded".to_string())
            );
            println!("verdict:               {:?}", config.verdict);
        }
    }
    Ok(())
}
