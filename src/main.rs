//! Stable Match - Binary Entry Point
//!
//! Runs deferred acceptance on an instance and prints the result.
//!
//! ```text
//! stable-match                  # built-in 4x4 instance
//! stable-match instance.json    # {"proposers": [[..]..], "responders": [[..]..]}
//! ```
//!
//! Set `RUST_LOG=stable_match=trace` to see every proposal.

use std::error::Error;
use std::fs;

use serde::Deserialize;
use tracing::info;

use stable_match::{AgentRegistry, Matcher, MatcherConfig};

/// Instance file layout: one ranking per agent, `id = index`
#[derive(Debug, Deserialize)]
struct Instance {
    proposers: Vec<Vec<usize>>,
    responders: Vec<Vec<usize>>,
    #[serde(default)]
    config: MatcherConfig,
}

impl Default for Instance {
    fn default() -> Self {
        let prefs = vec![vec![0, 1, 2, 3], vec![2, 3, 0, 1], vec![1, 0, 3, 2], vec![3, 2, 1, 0]];
        Self {
            proposers: prefs.clone(),
            responders: prefs,
            config: MatcherConfig::default(),
        }
    }
}

fn load_instance(path: Option<String>) -> Result<Instance, Box<dyn Error>> {
    match path {
        Some(path) => {
            info!(%path, "loading instance");
            let raw = fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => {
            info!("no instance file given, using built-in 4x4 instance");
            Ok(Instance::default())
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let instance = load_instance(std::env::args().nth(1))?;
    let registry = AgentRegistry::from_rankings(instance.proposers, instance.responders)?;
    let matcher = Matcher::with_config(instance.config);
    info!(
        agents = registry.len(),
        order = ?matcher.config().order,
        record_events = matcher.config().record_events,
        "running matcher"
    );
    let outcome = matcher.run(&registry)?;
    let receipt = outcome.receipt();

    println!("===========================================");
    println!("  Stable Match - Deferred Acceptance");
    println!("===========================================");
    println!();
    if receipt.is_empty() {
        println!("Empty instance: nothing to match");
    } else {
        println!("Matching ({} pairs):", outcome.matching.len());
        for (proposer, responder) in outcome.matching.pairs() {
            println!("  proposer {:>4} -> responder {:>4}", proposer, responder);
        }
    }
    println!();
    println!("  Proposals:      {:>8}", receipt.proposals);
    println!("  Rejections:     {:>8}", receipt.rejections);
    if let Some(rate) = receipt.rejection_rate() {
        println!("  Rejection rate: {:>8.3}", rate);
    }
    println!("  Matching root:  {}", receipt.matching_root_hex());

    Ok(())
}
