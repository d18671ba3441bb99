use anyhow::Result;
use clap::Args;
use resonance_core::analyzer::quick_score;
use resonance_core::{AffectAnalyzer, ResonanceConfig};

use super::TextInput;
use crate::output::format::format_analysis;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: TextInput,

    /// Also print the five-criterion quick score
    #[arg(long)]
    pub quick: bool,
}

pub fn run(args: &AnalyzeArgs, config: &ResonanceConfig, format: OutputFormat) -> Result<()> {
    let text = args.input.read()?;
    let analyzer = AffectAnalyzer::new(config.poetic_threshold);
    let analysis = analyzer.analyze(&text);

    let quick = args.quick.then(|| quick_score(&text));

    match (format, quick) {
        (OutputFormat::Json, Some(quick)) => {
            let value = serde_json::json!({
                "analysis": analysis,
                "quick_score": quick,
                "quick_verdict": analyzer.is_poetic_score(quick),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        (OutputFormat::Json, None) => {
            println!("{}", format_analysis(&analysis, analyzer.threshold(), format));
        }
        (OutputFormat::Text, quick) => {
            print!("{}", format_analysis(&analysis, analyzer.threshold(), format));
            if let Some(quick) = quick {
                let verdict = if analyzer.is_poetic_score(quick) { "yes" } else { "no" };
                println!("Quick:      {verdict} (score {quick:.2})");
            }
        }
    }

    Ok(())
}
