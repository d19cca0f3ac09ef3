//! Input value types: time units, durations and compounding frequencies

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{InterestError, LabelKind};

/// Days in the fixed-length year used for day-based terms (no calendar logic)
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Months per year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Unit a duration magnitude is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Years,
    Months,
    Days,
}

impl TimeUnit {
    /// Get the string representation used in output
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Years => "Years",
            TimeUnit::Months => "Months",
            TimeUnit::Days => "Days",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = InterestError;

    /// Accepts English names in any case, plus Spanish labels.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_lowercase().as_str() {
            "years" | "year" | "y" | "años" | "anos" => Ok(TimeUnit::Years),
            "months" | "month" | "m" | "meses" => Ok(TimeUnit::Months),
            "days" | "day" | "d" | "días" | "dias" => Ok(TimeUnit::Days),
            _ => Err(InterestError::unknown(LabelKind::TimeUnit, label)),
        }
    }
}

/// Convert a (magnitude, unit) pair into fractional years.
///
/// Months are 1/12 of a year and days 1/365; leap years are not modelled.
pub fn normalize_years(magnitude: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Years => magnitude,
        TimeUnit::Months => magnitude / MONTHS_PER_YEAR,
        TimeUnit::Days => magnitude / DAYS_PER_YEAR,
    }
}

/// A term of investment or borrowing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Duration {
    pub magnitude: f64,
    pub unit: TimeUnit,
}

impl Duration {
    pub fn new(magnitude: f64, unit: TimeUnit) -> Self {
        Self { magnitude, unit }
    }

    pub fn years(magnitude: f64) -> Self {
        Self::new(magnitude, TimeUnit::Years)
    }

    pub fn months(magnitude: f64) -> Self {
        Self::new(magnitude, TimeUnit::Months)
    }

    pub fn days(magnitude: f64) -> Self {
        Self::new(magnitude, TimeUnit::Days)
    }

    /// Length of the term in fractional years
    pub fn in_years(&self) -> f64 {
        normalize_years(self.magnitude, self.unit)
    }
}

/// How often interest is added to principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    Annual,
    Semiannual,
    Quarterly,
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    pub const ALL: [CompoundingFrequency; 5] = [
        CompoundingFrequency::Annual,
        CompoundingFrequency::Semiannual,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Daily,
    ];

    /// Number of compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annual => 1,
            CompoundingFrequency::Semiannual => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundingFrequency::Annual => "Annual",
            CompoundingFrequency::Semiannual => "Semiannual",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Daily => "Daily",
        }
    }
}

impl FromStr for CompoundingFrequency {
    type Err = InterestError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_lowercase().as_str() {
            "annual" | "annually" | "anual" => Ok(CompoundingFrequency::Annual),
            "semiannual" | "semi-annual" | "semestral" => Ok(CompoundingFrequency::Semiannual),
            "quarterly" | "trimestral" => Ok(CompoundingFrequency::Quarterly),
            "monthly" | "mensual" => Ok(CompoundingFrequency::Monthly),
            "daily" | "diario" => Ok(CompoundingFrequency::Daily),
            _ => Err(InterestError::unknown(LabelKind::Frequency, label)),
        }
    }
}

/// Resolve a frequency label straight to its periods-per-year count.
///
/// Unknown labels fail with `InvalidConfiguration`; there is no fallback.
pub fn resolve_frequency(label: &str) -> crate::error::Result<u32> {
    label
        .parse::<CompoundingFrequency>()
        .map(|freq| freq.periods_per_year())
}

/// Convert a user-entered percentage (8.0 for 8%) into the fractional rate
/// the engine expects.
pub fn percent_to_fraction(percent: f64) -> f64 {
    percent / 100.0
}
