//! Shot runner CLI
//!
//! Reads launch-monitor shot records (JSON, one record or an array) and
//! prints carry/total distances per shot.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use fairway_core::{simulate_shot, BallData, BufferTrace, ShotOptions, TraceLevel};

#[derive(Parser)]
#[command(name = "fairway_shot")]
#[command(about = "Simulate golf shots from launch monitor JSON records", long_about = None)]
struct Cli {
    /// Input JSON file: one shot record or an array of records
    #[arg(long)]
    r#in: PathBuf,

    /// Surface to land on (Fairway, FairwaySoft, Rough, Firm)
    #[arg(long, default_value = "Fairway")]
    surface: String,

    /// Print per-shot physics diagnostics
    #[arg(long, default_value = "false")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.r#in)
        .with_context(|| format!("reading {}", cli.r#in.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw).context("parsing shot JSON")?;

    let records = match value {
        serde_json::Value::Array(items) => items,
        other => vec![other],
    };

    let options = ShotOptions { surface: cli.surface.clone(), ..ShotOptions::default() };
    let level = if cli.verbose { TraceLevel::Verbose } else { TraceLevel::Off };

    for (index, record) in records.iter().enumerate() {
        let ball = BallData::from_record(record)
            .with_context(|| format!("shot {index}: invalid record"))?;

        let mut sink = BufferTrace::new(level);
        let result = simulate_shot(&ball, &options, &mut sink);

        println!(
            "shot {index}: carry {:.1} yd, total {:.1} yd ({} bounce(s), apex {:.1} m)",
            result.carry_yd(),
            result.total_yd(),
            result.bounces,
            result.apex_m
        );
        for line in sink.lines() {
            println!("  {line}");
        }
    }

    Ok(())
}
