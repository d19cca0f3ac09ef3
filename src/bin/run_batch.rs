//! Evaluate every request in a CSV file and write the results as CSV
//!
//! Usage: run_batch <requests.csv> [--output batch_output.csv]

use anyhow::{Context, Result};
use clap::Parser;
use interest_compare::engine::{Calculation, Direction, Regime};
use interest_compare::terms::{load_requests, CalculationRequest};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "run_batch", about = "Evaluate a CSV file of interest calculations")]
struct BatchArgs {
    /// Request file with header id,regime,direction,amount,rate_pct,term,unit,frequency
    requests: PathBuf,

    /// Where to write results
    #[arg(short, long, default_value = "batch_output.csv")]
    output: PathBuf,
}

/// One output row per request
#[derive(Debug, Serialize)]
struct BatchRow {
    id: String,
    regime: Regime,
    direction: Direction,
    frequency: String,
    input: f64,
    years: f64,
    value: f64,
    interest: f64,
}

impl BatchRow {
    fn from_request(request: &CalculationRequest) -> Self {
        let result = request.evaluate();
        let frequency = match request.calculation {
            Calculation::CompoundFuture(freq) | Calculation::CompoundPresent(freq) => {
                freq.as_str().to_string()
            }
            _ => String::new(),
        };

        Self {
            id: request.id.clone(),
            regime: request.calculation.regime(),
            direction: request.calculation.direction(),
            frequency,
            input: request.amount,
            years: request.duration.in_years(),
            value: result.value,
            interest: result.interest,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = BatchArgs::parse();
    let start = Instant::now();

    println!("Loading requests from {}...", args.requests.display());
    let requests = load_requests(&args.requests)
        .with_context(|| format!("Failed to load requests from {}", args.requests.display()))?;
    println!("Loaded {} requests in {:?}", requests.len(), start.elapsed());

    let eval_start = Instant::now();
    let rows: Vec<BatchRow> = requests.par_iter().map(BatchRow::from_request).collect();
    println!("Evaluated in {:?}", eval_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());

    let total_interest: f64 = rows.iter().map(|r| r.interest).sum();
    println!("\nBatch Summary:");
    println!("  Requests:       {}", rows.len());
    println!("  Total interest: {:.2}", total_interest);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
