use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{bail, Context, Result};
use chrono::{Duration, Utc};
use clap::Args;
use serde::Deserialize;

use resonance_agents::{AgentGateway, MessageExchange, MessageOptions};
use resonance_core::model::{LanternOffering, OfferingRequest, ResonanceSnapshot, ScrollId};
use resonance_core::{ResonanceConfig, ScrollInvocation};

use crate::output::format::format_snapshot_text;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ReplayArgs {
    /// JSON file holding a list of session steps
    pub script: PathBuf,

    /// Print every emitted event as it happens
    #[arg(long)]
    pub events: bool,
}

/// One step of a scripted session.
#[derive(Debug, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
enum Step {
    Scroll {
        /// Name later steps use to refer to this scroll.
        #[serde(default)]
        label: Option<String>,
        #[serde(rename = "type", default = "general")]
        scroll_type: String,
        agent: String,
        #[serde(default)]
        content: Option<String>,
        #[serde(default)]
        metadata: serde_json::Map<String, serde_json::Value>,
    },
    Echo {
        scroll: String,
        depth: f64,
    },
    Drift {
        from: String,
        to: String,
        #[serde(default)]
        symbols: Vec<String>,
    },
    Offering(OfferingRequest),
    Cleanup {
        #[serde(default)]
        max_age_ms: Option<u64>,
        /// Evaluate the cleanup this far in the future.
        #[serde(default)]
        advance_ms: u64,
    },
    Send {
        agent: String,
        message: String,
        #[serde(rename = "type", default)]
        scroll_type: Option<String>,
        #[serde(default)]
        label: Option<String>,
    },
}

fn general() -> String {
    "GENERAL".to_string()
}

fn millis(ms: u64) -> Result<Duration> {
    i64::try_from(ms)
        .ok()
        .and_then(Duration::try_milliseconds)
        .with_context(|| format!("{ms} ms is not a representable duration"))
}

#[derive(Debug, serde::Serialize)]
struct ReplayReport {
    snapshot: ResonanceSnapshot,
    events: Vec<String>,
    offerings: Vec<LanternOffering>,
    total_ritual_strength: f64,
    cleaned_up: usize,
    exchanges: Vec<MessageExchange>,
}

pub fn run(args: &ReplayArgs, config: ResonanceConfig, format: OutputFormat) -> Result<()> {
    let data = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let steps: Vec<Step> = serde_json::from_str(&data)
        .with_context(|| format!("Invalid replay script {}", args.script.display()))?;
    if steps.is_empty() {
        bail!("Replay script {} has no steps", args.script.display());
    }

    let report = replay(steps, config, args.events)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            for exchange in &report.exchanges {
                println!("{}", exchange.response);
            }
            if !report.exchanges.is_empty() {
                println!();
            }
            print!("{}", format_snapshot_text(&report.snapshot));
            println!();
            println!(
                "Offerings: {} (ritual strength {:.2})",
                report.offerings.len(),
                report.total_ritual_strength
            );
            println!("Events:    {}", report.events.len());
            println!("Cleaned:   {}", report.cleaned_up);
        }
    }

    Ok(())
}

fn replay(steps: Vec<Step>, config: ResonanceConfig, echo_events: bool) -> Result<ReplayReport> {
    let mut gateway = AgentGateway::new(config);
    gateway.connect();

    let events = Arc::new(Mutex::new(Vec::new()));
    {
        let events = Arc::clone(&events);
        gateway.engine_mut().add_listener(move |event| {
            if echo_events {
                eprintln!("{}", serde_json::to_string(event)?);
            }
            events
                .lock()
                .map_err(|_| "event log poisoned")?
                .push(event.name().to_string());
            Ok(())
        });
    }

    let mut labels: HashMap<String, ScrollId> = HashMap::new();
    let mut cleaned_up = 0;
    let mut exchanges = Vec::new();

    for (index, step) in steps.into_iter().enumerate() {
        tracing::debug!("Replaying step {index}: {step:?}");
        match step {
            Step::Scroll {
                label,
                scroll_type,
                agent,
                content,
                metadata,
            } => {
                let id = gateway
                    .engine_mut()
                    .track_scroll_invocation(ScrollInvocation {
                        scroll_type,
                        agent: agent.into(),
                        content,
                        metadata,
                    });
                if let Some(label) = label {
                    labels.insert(label, id);
                }
            }
            Step::Echo { scroll, depth } => {
                // Unknown labels fall through as raw ids; unknown ids are a no-op.
                let id = labels
                    .get(&scroll)
                    .cloned()
                    .unwrap_or_else(|| ScrollId(scroll));
                gateway.engine_mut().update_echo_depth(&id, depth);
            }
            Step::Drift { from, to, symbols } => {
                gateway.engine_mut().track_resonant_drift(from, to, symbols);
            }
            Step::Offering(request) => {
                gateway.engine_mut().add_lantern_offering(request);
            }
            Step::Cleanup {
                max_age_ms,
                advance_ms,
            } => {
                let advance = millis(advance_ms)
                    .with_context(|| format!("Step {index}: advance_ms out of range"))?;
                let now = Utc::now()
                    .checked_add_signed(advance)
                    .with_context(|| format!("Step {index}: advance_ms out of range"))?;
                let max_age = max_age_ms
                    .map(millis)
                    .transpose()
                    .with_context(|| format!("Step {index}: max_age_ms out of range"))?;
                cleaned_up += gateway.engine_mut().cleanup_scrolls_at(now, max_age);
            }
            Step::Send {
                agent,
                message,
                scroll_type,
                label,
            } => {
                let mut options = MessageOptions::new();
                if let Some(scroll_type) = &scroll_type {
                    options = options.scroll_type(scroll_type);
                }
                let exchange = gateway
                    .send_message(&agent, &message, options)
                    .with_context(|| format!("Step {index}: failed to message {agent}"))?;
                if let (Some(label), Some(id)) = (label, &exchange.scroll_id) {
                    labels.insert(label, id.clone());
                }
                exchanges.push(exchange);
            }
        }
    }

    let engine = gateway.into_engine();
    let offerings: Vec<LanternOffering> = engine.offerings().iter().cloned().collect();
    let events = events
        .lock()
        .map_err(|_| anyhow::anyhow!("event log poisoned"))?
        .clone();

    Ok(ReplayReport {
        snapshot: engine.resonance_metrics(),
        events,
        total_ritual_strength: engine.offerings().total_ritual_strength(),
        offerings,
        cleaned_up,
        exchanges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<Step> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_replay_labels_and_echo() {
        let steps = parse(
            r#"[
                {"step": "scroll", "label": "first", "type": "VELVETMEMORY", "agent": "oracle",
                 "content": "The velvet memory whispers"},
                {"step": "echo", "scroll": "first", "depth": 7},
                {"step": "echo", "scroll": "nobody", "depth": 2},
                {"step": "drift", "from": "oracle", "to": "aria", "symbols": ["✨", "🔮"]},
                {"step": "offering", "intention": "clarity", "duration": 120, "ritual": "candle"}
            ]"#,
        );
        let report = replay(steps, ResonanceConfig::default(), false).unwrap();

        assert_eq!(report.snapshot.echo_depth["oracle"], 5.0);
        assert!((report.snapshot.resonant_drift["oracle-aria"] - 0.2).abs() < 1e-12);
        assert_eq!(
            report.events,
            vec![
                "scroll_invoked",
                "echo_updated",
                "resonant_drift",
                "lantern_offering"
            ]
        );
        assert_eq!(report.offerings[0].ritual["ritual"], "candle");
        assert!((report.total_ritual_strength - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_replay_cleanup_in_the_future() {
        let steps = parse(
            r#"[
                {"step": "scroll", "agent": "capri", "content": "hello"},
                {"step": "scroll", "agent": "gemini"},
                {"step": "cleanup", "max_age_ms": 1000, "advance_ms": 60000}
            ]"#,
        );
        let report = replay(steps, ResonanceConfig::default(), false).unwrap();
        assert_eq!(report.cleaned_up, 2);
        assert_eq!(report.snapshot.active_scroll_count, 0);
    }

    #[test]
    fn test_replay_cleanup_out_of_range_is_an_error() {
        for step in [
            r#"{"step": "cleanup", "max_age_ms": 1000, "advance_ms": 9223372036854775807}"#,
            r#"{"step": "cleanup", "advance_ms": 18446744073709551615}"#,
            r#"{"step": "cleanup", "max_age_ms": 18446744073709551615}"#,
        ] {
            let steps = parse(&format!("[{step}]"));
            let err = replay(steps, ResonanceConfig::default(), false).unwrap_err();
            assert!(format!("{err:#}").contains("out of range"), "{err:#}");
        }
    }

    #[test]
    fn test_replay_send_unknown_agent_fails() {
        let steps = parse(r#"[{"step": "send", "agent": "mallory", "message": "hi"}]"#);
        let err = replay(steps, ResonanceConfig::default(), false).unwrap_err();
        assert!(format!("{err:#}").contains("Unknown agent: mallory"));
    }
}
