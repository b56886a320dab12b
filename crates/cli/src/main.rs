//! Tactical planner demo binary.
//!
//! Loads a RON scenario (or a built-in skirmish), then runs the
//! perceive → plan → step loop for the configured number of ticks, logging
//! every decision through `tracing`.
//!
//! ```bash
//! # Built-in skirmish
//! cargo run -p tactical-cli
//!
//! # Custom scenario, verbose scoring logs
//! RUST_LOG=debug cargo run -p tactical-cli -- --scenario scenarios/skirmish.ron
//! ```

mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tactical_core::{ResourceKind, perceive};
use tactical_planner::{Action, AttackAction, Planner, SeekCoverAction, UseResourceAction};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(about = "Run a utility-planner skirmish scenario")]
struct Args {
    /// Path to a RON scenario file. Uses the built-in skirmish when omitted.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Override the scenario's tick count.
    #[arg(long)]
    ticks: Option<u32>,
}

fn main() -> Result<()> {
    setup_logging();

    let args = Args::parse();
    let mut scenario = match &args.scenario {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading scenario file {}", path.display()))?;
            ron::from_str::<Scenario>(&text)
                .with_context(|| format!("parsing scenario file {}", path.display()))?
        }
        None => Scenario::builtin(),
    };
    if let Some(ticks) = args.ticks {
        scenario.ticks = ticks;
    }

    run(&scenario)
}

/// Logging to stderr with `RUST_LOG` overrides, INFO by default.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn run(scenario: &Scenario) -> Result<()> {
    let mut agent = scenario.build_agent();
    let mut field = scenario.build_battlefield();

    let actions: Vec<Box<dyn Action>> = vec![
        Box::new(AttackAction::default()),
        Box::new(SeekCoverAction::default()),
        Box::new(UseResourceAction::default()),
    ];
    let mut planner = Planner::new(actions).context("building planner")?;

    tracing::info!(
        ticks = scenario.ticks,
        dt = scenario.dt,
        health = agent.health().current(),
        ammo = agent.resource_amount(ResourceKind::Ammo),
        "starting skirmish"
    );

    for tick in 0..scenario.ticks {
        let snapshot = perceive(&agent, &field);
        planner.tick(&mut agent, &mut field, &snapshot, scenario.dt);

        let scores: Vec<String> = planner
            .last_evaluated_utilities()
            .iter()
            .map(|(kind, score)| format!("{kind}={score:.2}"))
            .collect();

        tracing::info!(
            tick,
            action = planner.current_action_name().unwrap_or("Idle"),
            scores = %scores.join(" "),
            health = agent.health().current(),
            ammo = agent.resource_amount(ResourceKind::Ammo),
            "tick"
        );

        if field
            .target
            .as_ref()
            .is_some_and(|t| t.health.is_depleted())
        {
            tracing::info!(tick, "target down, ending early");
            break;
        }
    }

    tracing::info!(
        health = agent.health().current(),
        ammo = agent.resource_amount(ResourceKind::Ammo),
        target_health = field.target.as_ref().map_or(0.0, |t| t.health.current()),
        "skirmish over"
    );

    Ok(())
}
