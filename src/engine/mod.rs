//! Interest engine: single-point valuations, yearly series and comparison tables

mod interest;
mod series;
mod comparison;

pub use interest::{
    simple_future_value, simple_present_value, compound_future_value, compound_present_value,
    InterestResult, Calculation, Regime, Direction,
};
pub use series::{generate_series, SeriesPoint};
pub use comparison::{
    build_table, build_table_with_divisor, sample_periods, sample_step, compare_final_values,
    quick_compare, ComparisonPoint, ComparisonSummary, DEFAULT_SAMPLE_DIVISOR,
};
