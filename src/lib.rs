//! Interest Compare - Simple and compound interest valuation engine
//!
//! This library provides:
//! - Future and present value under simple and compound interest
//! - Time-unit normalization (years, months, days) and compounding frequencies
//! - Year-by-year simple vs compound series for charting
//! - Sampled comparison tables with absolute and relative advantage
//! - Batch request loading from CSV and a catalogue of worked cases
//!
//! All rates passed to the engine are fractions (0.08 for 8%). Converting a
//! user-entered percentage is the caller's job; see [`terms::percent_to_fraction`].

pub mod error;
pub mod terms;
pub mod engine;
pub mod cases;
pub mod config;

// Re-export commonly used types
pub use error::{InterestError, Result};
pub use terms::{CompoundingFrequency, Duration, TimeUnit};
pub use engine::{
    InterestResult, SeriesPoint, ComparisonPoint, ComparisonSummary,
    simple_future_value, simple_present_value, compound_future_value, compound_present_value,
    generate_series, build_table,
};
pub use config::CalculatorConfig;
