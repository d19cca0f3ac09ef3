//! Calculator defaults with environment overrides
//!
//! Recognized variables:
//!   INTEREST_PRINCIPAL, INTEREST_RATE_PCT, INTEREST_TERM, INTEREST_UNIT,
//!   INTEREST_FREQUENCY, INTEREST_HORIZON_YEARS, INTEREST_SAMPLE_DIVISOR

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::engine::DEFAULT_SAMPLE_DIVISOR;
use crate::error::Result;
use crate::terms::{percent_to_fraction, CompoundingFrequency, Duration, TimeUnit};

/// Default inputs for a calculator session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Principal or target amount
    pub principal: f64,
    /// Annual rate in percent (8.0 for 8%)
    pub rate_pct: f64,
    /// Term magnitude
    pub term: f64,
    pub unit: TimeUnit,
    pub frequency: CompoundingFrequency,
    /// Horizon in whole years for series and tables
    pub horizon_years: u32,
    /// Number of steps the table horizon is split into
    pub sample_divisor: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            principal: 10_000.0,
            rate_pct: 8.0,
            term: 5.0,
            unit: TimeUnit::Years,
            frequency: CompoundingFrequency::Annual,
            horizon_years: 10,
            sample_divisor: DEFAULT_SAMPLE_DIVISOR,
        }
    }
}

impl CalculatorConfig {
    /// Defaults overridden by process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    ///
    /// Unparsable numbers and a zero sample divisor fall back to the default
    /// with a warning. Unknown unit or frequency labels are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let unit = match lookup("INTEREST_UNIT") {
            Some(label) => label.parse::<TimeUnit>()?,
            None => defaults.unit,
        };
        let frequency = match lookup("INTEREST_FREQUENCY") {
            Some(label) => label.parse::<CompoundingFrequency>()?,
            None => defaults.frequency,
        };
        let sample_divisor = match numeric_or(&lookup, "INTEREST_SAMPLE_DIVISOR", defaults.sample_divisor) {
            0 => {
                log::warn!(
                    "Ignoring INTEREST_SAMPLE_DIVISOR=0: must be at least 1, using {}",
                    defaults.sample_divisor
                );
                defaults.sample_divisor
            }
            divisor => divisor,
        };

        Ok(Self {
            principal: numeric_or(&lookup, "INTEREST_PRINCIPAL", defaults.principal),
            rate_pct: numeric_or(&lookup, "INTEREST_RATE_PCT", defaults.rate_pct),
            term: numeric_or(&lookup, "INTEREST_TERM", defaults.term),
            unit,
            frequency,
            horizon_years: numeric_or(&lookup, "INTEREST_HORIZON_YEARS", defaults.horizon_years),
            sample_divisor,
        })
    }

    /// Configured rate as the fraction the engine expects
    pub fn annual_rate(&self) -> f64 {
        percent_to_fraction(self.rate_pct)
    }

    pub fn duration(&self) -> Duration {
        Duration::new(self.term, self.unit)
    }
}

fn numeric_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display + Copy,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring {}={:?}: not a number, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}
