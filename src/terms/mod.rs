//! Calculation inputs and batch request loading

mod data;
pub mod loader;

pub use data::{
    normalize_years, resolve_frequency, percent_to_fraction, TimeUnit, Duration,
    CompoundingFrequency, DAYS_PER_YEAR, MONTHS_PER_YEAR,
};
pub use loader::{load_requests, load_requests_from_reader, CalculationRequest};
