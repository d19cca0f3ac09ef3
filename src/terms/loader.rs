//! Load batch calculation requests from CSV
//!
//! Expected header: `id,regime,direction,amount,rate_pct,term,unit,frequency`.
//! Rates are given in percent and converted to fractions here, at the boundary.

use csv::Reader;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::data::{percent_to_fraction, CompoundingFrequency, Duration, TimeUnit};
use crate::engine::{Calculation, Direction, InterestResult, Regime};
use crate::error::{InterestError, Result};

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    regime: String,
    direction: String,
    amount: f64,
    rate_pct: f64,
    term: f64,
    unit: String,
    #[serde(default)]
    frequency: Option<String>,
}

impl CsvRow {
    fn to_request(self, line: u64) -> Result<CalculationRequest> {
        let regime: Regime = self.regime.parse()?;
        let direction: Direction = self.direction.parse()?;
        let unit: TimeUnit = self.unit.parse()?;

        let frequency = match self.frequency.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(label) => Some(label.parse::<CompoundingFrequency>()?),
        };

        if regime == Regime::Simple && frequency.is_some() {
            log::debug!("Line {}: frequency ignored for simple interest", line);
        }

        let calculation = Calculation::from_parts(regime, direction, frequency).ok_or_else(|| {
            InterestError::InvalidRequest {
                line,
                reason: "compound interest requires a frequency".to_string(),
            }
        })?;

        Ok(CalculationRequest {
            id: self.id,
            calculation,
            amount: self.amount,
            annual_rate: percent_to_fraction(self.rate_pct),
            duration: Duration::new(self.term, unit),
        })
    }
}

/// A single calculation to run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub id: String,
    pub calculation: Calculation,
    /// Principal for future-value requests, target amount for present-value
    pub amount: f64,
    /// Fractional annual rate
    pub annual_rate: f64,
    pub duration: Duration,
}

impl CalculationRequest {
    pub fn evaluate(&self) -> InterestResult {
        self.calculation.evaluate(self.amount, self.annual_rate, self.duration)
    }
}

/// Load all requests from a CSV file
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<CalculationRequest>> {
    let reader = Reader::from_path(path)?;
    collect_requests(reader)
}

/// Load requests from any reader (e.g., string buffer, stdin)
pub fn load_requests_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<CalculationRequest>> {
    collect_requests(Reader::from_reader(reader))
}

fn collect_requests<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<CalculationRequest>> {
    let headers = reader.headers()?.clone();
    let mut requests = Vec::new();

    for result in reader.records() {
        let record = result?;
        // line where the record starts, so quoted multi-line fields count
        let line = record.position().map(|pos| pos.line()).unwrap_or(0);
        let row: CsvRow = record.deserialize(Some(&headers))?;
        requests.push(row.to_request(line)?);
    }

    log::debug!("Loaded {} calculation requests", requests.len());
    Ok(requests)
}
