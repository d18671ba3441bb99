use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use resonance_core::ResonanceConfig;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "resonance",
    version,
    about = "Track poetic resonance across agent scroll invocations"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: output::OutputFormat,

    /// JSON engine config file (defaults apply to missing fields)
    #[arg(long, global = true, env = "RESONANCE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Commands,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<ResonanceConfig> {
    match path {
        Some(path) => ResonanceConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(ResonanceConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_ref())?;

    match &cli.command {
        commands::Commands::Analyze(args) => commands::analyze::run(args, &config, cli.format),
        commands::Commands::Footprint(args) => commands::footprint::run(args, cli.format),
        commands::Commands::Replay(args) => commands::replay::run(args, config, cli.format),
        commands::Commands::Config(args) => commands::config::run(args, &config, cli.format),
        commands::Commands::Version => commands::version::run(),
    }
}
