//! Sampled comparison table and final-value summaries
//!
//! The table walks the horizon in whole years with a step chosen so that
//! roughly `divisor + 1` rows are produced whatever the horizon. When the
//! step does not divide the horizon evenly the horizon itself is appended,
//! so the last row always sits on `max_periods`.

use serde::{Deserialize, Serialize};

use super::interest::{compound_future, simple_future, warn_on_domain_edges};
use super::series::SeriesPoint;
use crate::terms::{CompoundingFrequency, Duration};

/// Default number of steps the table horizon is split into
pub const DEFAULT_SAMPLE_DIVISOR: u32 = 10;

/// One row of the comparison table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    pub period: u32,
    pub simple_value: f64,
    pub compound_value: f64,
    /// compound - simple
    pub difference: f64,
    /// difference / simple * 100, or 0 when simple is not positive
    pub relative_advantage_pct: f64,
}

impl From<SeriesPoint> for ComparisonPoint {
    fn from(point: SeriesPoint) -> Self {
        let difference = point.compound_value - point.simple_value;
        let relative_advantage_pct = if point.simple_value > 0.0 {
            difference / point.simple_value * 100.0
        } else {
            0.0
        };

        Self {
            period: point.period,
            simple_value: point.simple_value,
            compound_value: point.compound_value,
            difference,
            relative_advantage_pct,
        }
    }
}

/// Sampling step: max(1, max_periods / divisor) with integer division
pub fn sample_step(max_periods: u32, divisor: u32) -> u32 {
    (max_periods / divisor.max(1)).max(1)
}

/// Periods 0, step, 2*step, ... and finally `max_periods` itself.
/// A divisor of 0 is treated as 1 with a warning.
pub fn sample_periods(max_periods: u32, divisor: u32) -> Vec<u32> {
    if divisor == 0 {
        log::warn!("Sample divisor 0 treated as 1: table will hold only the first and last period");
    }
    let step = sample_step(max_periods, divisor);
    let mut periods: Vec<u32> = (0..=max_periods).step_by(step as usize).collect();

    if periods.last() != Some(&max_periods) {
        periods.push(max_periods);
    }

    log::debug!(
        "Sampling {} periods with step {} -> {} rows",
        max_periods,
        step,
        periods.len()
    );
    periods
}

/// Build the comparison table with the default divisor of 10
pub fn build_table(
    principal: f64,
    annual_rate: f64,
    max_periods: u32,
    frequency: CompoundingFrequency,
) -> Vec<ComparisonPoint> {
    build_table_with_divisor(principal, annual_rate, max_periods, frequency, DEFAULT_SAMPLE_DIVISOR)
}

/// Build the comparison table splitting the horizon into `divisor` steps
pub fn build_table_with_divisor(
    principal: f64,
    annual_rate: f64,
    max_periods: u32,
    frequency: CompoundingFrequency,
    divisor: u32,
) -> Vec<ComparisonPoint> {
    warn_on_domain_edges(principal, annual_rate, Duration::years(max_periods as f64));
    sample_periods(max_periods, divisor)
        .into_iter()
        .map(|period| SeriesPoint::at_period(principal, annual_rate, period, frequency).into())
        .collect()
}

/// Side-by-side final values of both regimes over one term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub simple_value: f64,
    pub simple_interest: f64,
    pub compound_value: f64,
    pub compound_interest: f64,
    pub frequency: CompoundingFrequency,
    /// compound - simple
    pub difference: f64,
    /// difference / simple * 100; None when the simple value is not positive
    pub advantage_pct: Option<f64>,
}

/// Compare simple and compound growth of `principal` over `duration`
pub fn compare_final_values(
    principal: f64,
    annual_rate: f64,
    duration: Duration,
    frequency: CompoundingFrequency,
) -> ComparisonSummary {
    warn_on_domain_edges(principal, annual_rate, duration);
    let simple = simple_future(principal, annual_rate, duration);
    let compound = compound_future(principal, annual_rate, duration, frequency);
    let difference = compound.value - simple.value;

    ComparisonSummary {
        simple_value: simple.value,
        simple_interest: simple.interest,
        compound_value: compound.value,
        compound_interest: compound.interest,
        frequency,
        difference,
        advantage_pct: (simple.value > 0.0).then(|| difference / simple.value * 100.0),
    }
}

/// Quick check: simple interest against monthly compounding over any term
pub fn quick_compare(principal: f64, annual_rate: f64, duration: Duration) -> ComparisonSummary {
    compare_final_values(principal, annual_rate, duration, CompoundingFrequency::Monthly)
}
