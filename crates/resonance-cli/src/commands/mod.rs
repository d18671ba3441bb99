pub mod analyze;
pub mod config;
pub mod footprint;
pub mod replay;
pub mod version;

use std::io::Read as _;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Score text against the poetic affect heuristics
    Analyze(analyze::AnalyzeArgs),
    /// Show the amethyst/citrine/obsidian footprint of text
    Footprint(footprint::FootprintArgs),
    /// Replay a scripted session against a fresh engine and print its metrics
    Replay(replay::ReplayArgs),
    /// Show or write the engine configuration
    Config(config::ConfigArgs),
    /// Print version information
    Version,
}

/// Text given inline, from a file, or on stdin.
#[derive(Args)]
pub struct TextInput {
    /// Text to score ("-" reads stdin)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long)]
    pub file: Option<std::path::PathBuf>,
}

impl TextInput {
    pub fn read(&self) -> Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) if text != "-" => Ok(text.clone()),
            (_, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            _ => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}
