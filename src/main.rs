//! Interest Compare CLI
//!
//! Command-line front end for the interest engine. Rates are entered in
//! percent and converted to fractions before reaching the engine. Any option
//! left out falls back to `CalculatorConfig::from_env()`.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use interest_compare::cases;
use interest_compare::engine::{
    build_table_with_divisor, compare_final_values, generate_series, quick_compare, Calculation,
    ComparisonSummary, Direction, InterestResult, Regime,
};
use interest_compare::terms::{percent_to_fraction, CompoundingFrequency, Duration, TimeUnit};
use interest_compare::CalculatorConfig;

/// Simple vs compound interest calculator
#[derive(Parser)]
#[command(name = "interest-compare")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print JSON instead of a text table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value a present sum at the end of the term
    FutureValue(ValuationArgs),

    /// Amount to invest today to reach a future sum
    PresentValue(ValuationArgs),

    /// Year-by-year simple and compound values
    Series(HorizonArgs),

    /// Sampled comparison table over the horizon
    Table {
        #[command(flatten)]
        horizon: HorizonArgs,

        /// Number of steps to split the horizon into (at least 1)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        divisor: Option<u32>,
    },

    /// Final simple vs compound values over one term
    Compare(TermArgs),

    /// Simple interest against monthly compounding
    Quick {
        #[command(flatten)]
        inputs: InputArgs,

        /// Term length
        #[arg(short, long)]
        term: Option<f64>,

        /// Term unit (Years, Months, Days)
        #[arg(short, long)]
        unit: Option<String>,
    },

    /// Evaluate the worked business and investment cases
    Cases,
}

#[derive(Clone, Copy, ValueEnum)]
enum RegimeArg {
    Simple,
    Compound,
}

impl From<RegimeArg> for Regime {
    fn from(arg: RegimeArg) -> Self {
        match arg {
            RegimeArg::Simple => Regime::Simple,
            RegimeArg::Compound => Regime::Compound,
        }
    }
}

#[derive(Args)]
struct InputArgs {
    /// Principal (or target amount for present value)
    #[arg(short, long)]
    amount: Option<f64>,

    /// Annual rate in percent, e.g. 8 for 8%
    #[arg(short, long)]
    rate: Option<f64>,
}

#[derive(Args)]
struct TermArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// Term length
    #[arg(short, long)]
    term: Option<f64>,

    /// Term unit (Years, Months, Days)
    #[arg(short, long)]
    unit: Option<String>,

    /// Compounding frequency (Annual, Semiannual, Quarterly, Monthly, Daily)
    #[arg(short, long)]
    frequency: Option<String>,
}

#[derive(Args)]
struct ValuationArgs {
    #[arg(long, value_enum, default_value = "compound")]
    regime: RegimeArg,

    #[command(flatten)]
    term: TermArgs,
}

#[derive(Args)]
struct HorizonArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// Horizon in whole years
    #[arg(short = 'y', long)]
    years: Option<u32>,

    /// Compounding frequency (Annual, Semiannual, Quarterly, Monthly, Daily)
    #[arg(short, long)]
    frequency: Option<String>,
}

/// Fully resolved inputs for one invocation
struct Inputs {
    amount: f64,
    annual_rate: f64,
    rate_pct: f64,
}

impl Inputs {
    fn resolve(args: &InputArgs, config: &CalculatorConfig) -> Self {
        let rate_pct = args.rate.unwrap_or(config.rate_pct);
        Self {
            amount: args.amount.unwrap_or(config.principal),
            annual_rate: percent_to_fraction(rate_pct),
            rate_pct,
        }
    }
}

fn resolve_duration(term: Option<f64>, unit: Option<&str>, config: &CalculatorConfig) -> Result<Duration> {
    let unit = match unit {
        Some(label) => label.parse::<TimeUnit>()?,
        None => config.unit,
    };
    Ok(Duration::new(term.unwrap_or(config.term), unit))
}

fn resolve_frequency(label: Option<&str>, config: &CalculatorConfig) -> Result<CompoundingFrequency> {
    Ok(match label {
        Some(label) => label.parse::<CompoundingFrequency>()?,
        None => config.frequency,
    })
}

#[derive(Serialize)]
struct ValuationOutput {
    regime: Regime,
    direction: Direction,
    amount: f64,
    rate_pct: f64,
    years: f64,
    frequency: Option<CompoundingFrequency>,
    result: InterestResult,
    return_pct: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = CalculatorConfig::from_env().context("Invalid INTEREST_* environment configuration")?;

    match cli.command {
        Commands::FutureValue(args) => run_valuation(Direction::Future, &args, &config, cli.json),
        Commands::PresentValue(args) => run_valuation(Direction::Present, &args, &config, cli.json),
        Commands::Series(args) => run_series(&args, &config, cli.json),
        Commands::Table { horizon, divisor } => run_table(&horizon, divisor, &config, cli.json),
        Commands::Compare(args) => {
            let inputs = Inputs::resolve(&args.inputs, &config);
            let duration = resolve_duration(args.term, args.unit.as_deref(), &config)?;
            let frequency = resolve_frequency(args.frequency.as_deref(), &config)?;
            let summary = compare_final_values(inputs.amount, inputs.annual_rate, duration, frequency);
            print_summary(&summary, cli.json)
        }
        Commands::Quick { inputs, term, unit } => {
            let inputs = Inputs::resolve(&inputs, &config);
            let duration = resolve_duration(term, unit.as_deref(), &config)?;
            let summary = quick_compare(inputs.amount, inputs.annual_rate, duration);
            print_summary(&summary, cli.json)
        }
        Commands::Cases => run_cases(cli.json),
    }
}

fn run_valuation(
    direction: Direction,
    args: &ValuationArgs,
    config: &CalculatorConfig,
    json: bool,
) -> Result<()> {
    let inputs = Inputs::resolve(&args.term.inputs, config);
    let duration = resolve_duration(args.term.term, args.term.unit.as_deref(), config)?;
    let regime = Regime::from(args.regime);

    let frequency = match regime {
        Regime::Simple => None,
        Regime::Compound => Some(resolve_frequency(args.term.frequency.as_deref(), config)?),
    };
    let calculation = Calculation::from_parts(regime, direction, frequency)
        .context("compound interest requires a frequency")?;

    let result = calculation.evaluate(inputs.amount, inputs.annual_rate, duration);
    let output = ValuationOutput {
        regime,
        direction,
        amount: inputs.amount,
        rate_pct: inputs.rate_pct,
        years: duration.in_years(),
        frequency,
        result,
        return_pct: (direction == Direction::Future).then(|| result.return_pct(inputs.amount)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let (value_label, interest_label) = match direction {
        Direction::Future => ("Future value", "Interest gained"),
        Direction::Present => ("Present value", "Total interest"),
    };

    println!("{:?} interest, {:.4} years at {:.2}%", regime, output.years, output.rate_pct);
    if let Some(freq) = frequency {
        println!("  Compounding: {} ({} per year)", freq.as_str(), freq.periods_per_year());
    }
    println!("  {:<16} {:>16}", value_label, format_money(result.value));
    println!("  {:<16} {:>16}", interest_label, format_money(result.interest));
    if let Some(pct) = output.return_pct {
        println!("  {:<16} {:>15.2}%", "Return", pct);
    }
    Ok(())
}

fn run_series(args: &HorizonArgs, config: &CalculatorConfig, json: bool) -> Result<()> {
    let inputs = Inputs::resolve(&args.inputs, config);
    let frequency = resolve_frequency(args.frequency.as_deref(), config)?;
    let years = args.years.unwrap_or(config.horizon_years);

    let series = generate_series(inputs.amount, inputs.annual_rate, years, frequency);

    if json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    println!("{:>6} {:>18} {:>18}", "Year", "Simple", "Compound");
    println!("{}", "-".repeat(44));
    for point in &series {
        println!(
            "{:>6} {:>18} {:>18}",
            point.period,
            format_money(point.simple_value),
            format_money(point.compound_value)
        );
    }
    Ok(())
}

fn run_table(
    args: &HorizonArgs,
    divisor: Option<u32>,
    config: &CalculatorConfig,
    json: bool,
) -> Result<()> {
    let inputs = Inputs::resolve(&args.inputs, config);
    let frequency = resolve_frequency(args.frequency.as_deref(), config)?;
    let years = args.years.unwrap_or(config.horizon_years);
    let divisor = divisor.unwrap_or(config.sample_divisor);

    let table = build_table_with_divisor(inputs.amount, inputs.annual_rate, years, frequency, divisor);

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!(
        "{:>6} {:>18} {:>18} {:>16} {:>10}",
        "Year", "Simple", "Compound", "Difference", "Advantage"
    );
    println!("{}", "-".repeat(72));
    for row in &table {
        println!(
            "{:>6} {:>18} {:>18} {:>16} {:>9.2}%",
            row.period,
            format_money(row.simple_value),
            format_money(row.compound_value),
            format_money(row.difference),
            row.relative_advantage_pct
        );
    }
    Ok(())
}

fn print_summary(summary: &ComparisonSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!("  {:<22} {:>16}", "Simple final value", format_money(summary.simple_value));
    println!(
        "  {:<22} {:>16}",
        format!("Compound ({})", summary.frequency.as_str()),
        format_money(summary.compound_value)
    );
    println!("  {:<22} {:>16}", "Compound advantage", format_money(summary.difference));
    if let Some(pct) = summary.advantage_pct {
        println!("  {:<22} {:>15.2}%", "Advantage", pct);
    }
    Ok(())
}

fn run_cases(json: bool) -> Result<()> {
    let catalogue = cases::catalogue();

    if json {
        #[derive(Serialize)]
        struct CaseOutput<'a> {
            #[serde(flatten)]
            case: &'a cases::WorkedCase,
            result: InterestResult,
        }

        let output: Vec<CaseOutput> = catalogue
            .iter()
            .map(|case| CaseOutput { case, result: case.evaluate() })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for case in &catalogue {
        let result = case.evaluate();
        println!("{} ({:?})", case.name, case.category);
        println!("  {}", case.description);
        println!(
            "  {} at {:.2}% for {} {}",
            format_money(case.amount),
            case.annual_rate * 100.0,
            case.duration.magnitude,
            case.duration.unit.as_str()
        );
        println!("  Result:   {:>14}", format_money(result.value));
        println!("  Interest: {:>14}", format_money(result.interest));
        println!();
    }
    Ok(())
}

/// Two decimals with thousands separators, e.g. $14,693.28
fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}
