//! boids-run: headless flock runner.
//!
//! Usage:
//!   boids-run run --ticks 600 --config flock.json --script clicks.json --every 30
//!   boids-run run --ticks 300 --realtime --summary
//!   boids-run default-config > flock.json
//!
//! `run` prints one JSON snapshot per emitted tick on stdout (or a one-line
//! summary with `--summary`). A script is a JSON array of
//! `{"tick": N, "command": {...}}` entries applied before tick N.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{info, warn};

use boids_core::commands::FlockCommand;
use boids_core::constants::TICK_RATE;
use boids_core::state::FlockSnapshot;
use boids_core::FlockConfig;
use boids_sim::FlockEngine;

/// Nominal duration of one tick when pacing in real time.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Parser)]
#[command(name = "boids-run", about = "Headless boids flocking simulation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the simulation and stream snapshots as JSON lines.
    Run {
        /// Number of ticks to simulate.
        #[arg(long, default_value_t = 600)]
        ticks: u64,
        /// JSON config file; missing fields take defaults.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the config's RNG seed.
        #[arg(long)]
        seed: Option<u64>,
        /// JSON array of scripted commands keyed by tick.
        #[arg(long)]
        script: Option<PathBuf>,
        /// Emit a snapshot every N ticks.
        #[arg(long, default_value_t = 1)]
        every: u64,
        /// Print a per-emit summary line instead of full snapshots.
        #[arg(long)]
        summary: bool,
        /// Pace ticks at the nominal frame rate.
        #[arg(long)]
        realtime: bool,
    },
    /// Print the default configuration as JSON.
    DefaultConfig,
}

/// A command scheduled before a given tick.
#[derive(Debug, serde::Deserialize)]
struct ScriptEntry {
    tick: u64,
    command: FlockCommand,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            ticks,
            config,
            seed,
            script,
            every,
            summary,
            realtime,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(seed) = seed {
                config.seed = seed;
            }
            let script = match script {
                Some(path) => load_script(&path)?,
                None => Vec::new(),
            };
            let options = RunOptions {
                ticks,
                every: every.max(1),
                summary,
                realtime,
            };
            run(config, script, &options)
        }
        Command::DefaultConfig => {
            let json = serde_json::to_string_pretty(&FlockConfig::default())?;
            println!("{json}");
            Ok(())
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<FlockConfig> {
    let Some(path) = path else {
        return Ok(FlockConfig::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn load_script(path: &Path) -> Result<Vec<ScriptEntry>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading script {}", path.display()))?;
    let mut entries: Vec<ScriptEntry> = serde_json::from_str(&text)
        .with_context(|| format!("parsing script {}", path.display()))?;
    entries.sort_by_key(|entry| entry.tick);
    Ok(entries)
}

struct RunOptions {
    ticks: u64,
    every: u64,
    summary: bool,
    realtime: bool,
}

fn run(config: FlockConfig, script: Vec<ScriptEntry>, options: &RunOptions) -> Result<()> {
    let mut engine = FlockEngine::new(config).context("invalid flock configuration")?;
    let mut script = script.into_iter().peekable();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let started = Instant::now();
    let mut next_tick_time = Instant::now();

    for tick in 0..options.ticks {
        while let Some(entry) = script.next_if(|entry| entry.tick <= tick) {
            if entry.tick < tick {
                warn!(scheduled = entry.tick, tick, "late script entry applied");
            }
            engine.queue_command(entry.command);
        }

        let snapshot = engine.tick();
        if snapshot.time.tick % options.every == 0 {
            let line = if options.summary {
                summarize(&snapshot)
            } else {
                serde_json::to_value(&snapshot)?
            };
            writeln!(out, "{line}")?;
        }

        if options.realtime {
            out.flush()?;
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind; reset to avoid a catch-up spiral.
                next_tick_time = now;
            }
        }
    }
    out.flush()?;

    info!(
        ticks = options.ticks,
        population = engine.population(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "run complete"
    );
    Ok(())
}

fn summarize(snapshot: &FlockSnapshot) -> Value {
    serde_json::json!({
        "tick": snapshot.time.tick,
        "population": snapshot.boids.len(),
        "mean_speed": snapshot.mean_speed(),
        "flags": snapshot.flags,
        "predator_enabled": snapshot.predator_enabled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use boids_core::enums::Rule;

    #[test]
    fn test_script_entries_parse_and_sort() {
        let dir = std::env::temp_dir().join(format!("boids-run-script-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("script.json");
        fs::write(
            &path,
            r#"[
                {"tick": 40, "command": {"type": "Click", "x": 1.0, "y": 2.0}},
                {"tick": 5, "command": {"type": "ToggleRule", "rule": "Alignment"}}
            ]"#,
        )
        .unwrap();

        let entries = load_script(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tick, 5);
        assert_eq!(
            entries[0].command,
            FlockCommand::ToggleRule {
                rule: Rule::Alignment
            }
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_config_path_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), FlockConfig::default());
    }

    #[test]
    fn test_summary_reports_population() {
        let engine = FlockEngine::new(FlockConfig {
            population: 7,
            ..Default::default()
        })
        .unwrap();
        let summary = summarize(&engine.snapshot());
        assert_eq!(summary["population"], 7);
        assert_eq!(summary["tick"], 0);
    }
}
