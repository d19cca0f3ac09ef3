//! Year-by-year simple vs compound value series for charting

use serde::{Deserialize, Serialize};

use super::interest::{compound_future, simple_future, warn_on_domain_edges};
use crate::terms::{CompoundingFrequency, Duration};

/// Values of both regimes at one whole-year period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub period: u32,
    pub simple_value: f64,
    pub compound_value: f64,
}

impl SeriesPoint {
    /// Evaluate both regimes at `period` years. Period 0 is the principal
    /// for both without calling the formulas. Nothing is logged here.
    pub fn at_period(
        principal: f64,
        annual_rate: f64,
        period: u32,
        frequency: CompoundingFrequency,
    ) -> Self {
        if period == 0 {
            return Self {
                period,
                simple_value: principal,
                compound_value: principal,
            };
        }

        let duration = Duration::years(period as f64);
        Self {
            period,
            simple_value: simple_future(principal, annual_rate, duration).value,
            compound_value: compound_future(principal, annual_rate, duration, frequency).value,
        }
    }
}

/// Generate points for periods 0..=max_periods, one per year
pub fn generate_series(
    principal: f64,
    annual_rate: f64,
    max_periods: u32,
    frequency: CompoundingFrequency,
) -> Vec<SeriesPoint> {
    warn_on_domain_edges(principal, annual_rate, Duration::years(max_periods as f64));
    (0..=max_periods)
        .map(|period| SeriesPoint::at_period(principal, annual_rate, period, frequency))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::count_warnings;
    use approx::assert_relative_eq;

    #[test]
    fn test_series_length_and_order() {
        let series = generate_series(10_000.0, 0.08, 10, CompoundingFrequency::Annual);
        assert_eq!(series.len(), 11);
        for (i, point) in series.iter().enumerate() {
            assert_eq!(point.period, i as u32);
        }
    }

    #[test]
    fn test_period_zero_is_principal() {
        let series = generate_series(7_500.0, 0.12, 3, CompoundingFrequency::Daily);
        assert_eq!(series[0].simple_value, 7_500.0);
        assert_eq!(series[0].compound_value, 7_500.0);
    }

    #[test]
    fn test_empty_horizon_yields_single_point() {
        let series = generate_series(100.0, 0.05, 0, CompoundingFrequency::Monthly);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].period, 0);
    }

    #[test]
    fn test_points_match_formulas() {
        let series = generate_series(10_000.0, 0.08, 5, CompoundingFrequency::Quarterly);
        let last = series.last().unwrap();
        assert_relative_eq!(last.simple_value, 14_000.0, max_relative = 1e-12);
        assert_relative_eq!(last.compound_value, 10_000.0 * 1.02_f64.powi(20), max_relative = 1e-9);
    }

    #[test]
    fn test_series_is_recomputed_per_call() {
        let a = generate_series(1_000.0, 0.05, 4, CompoundingFrequency::Semiannual);
        let b = generate_series(1_000.0, 0.05, 4, CompoundingFrequency::Semiannual);
        assert_eq!(a, b);
    }

    #[test]
    fn test_negative_rate_warns_once_per_series() {
        let (series, warnings) =
            count_warnings(|| generate_series(1_000.0, -0.01, 100, CompoundingFrequency::Annual));
        assert_eq!(series.len(), 101);
        assert_eq!(warnings, 1);
        assert!(series[100].compound_value < series[1].compound_value);
    }

    #[test]
    fn test_positive_inputs_do_not_warn() {
        let (_, warnings) =
            count_warnings(|| generate_series(1_000.0, 0.05, 50, CompoundingFrequency::Daily));
        assert_eq!(warnings, 0);
    }
}
