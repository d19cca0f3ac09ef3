//! Closed-form simple and compound interest evaluators
//!
//! All four formulas take a fractional annual rate (0.08 for 8%) and a
//! `Duration` that is normalized to years before evaluation. Negative inputs
//! are accepted and give the mathematically consistent result; they are
//! logged once at warn level per public call but never rejected. Series and
//! table generators evaluate each period through the unlogged helpers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{InterestError, LabelKind};
use crate::terms::{CompoundingFrequency, Duration};

/// Result of a single valuation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestResult {
    /// Future value for FV calculations, present value for PV calculations
    pub value: f64,
    /// Interest gained (FV) or total interest discounted away (PV)
    pub interest: f64,
}

impl InterestResult {
    /// Percentage growth of `value` over `base`, e.g. 46.93 for 46.93%.
    /// Zero when `base` is zero.
    pub fn return_pct(&self, base: f64) -> f64 {
        if base == 0.0 {
            return 0.0;
        }
        (self.value / base - 1.0) * 100.0
    }
}

/// Interest regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    Simple,
    Compound,
}

impl FromStr for Regime {
    type Err = InterestError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_lowercase().as_str() {
            "simple" => Ok(Regime::Simple),
            "compound" => Ok(Regime::Compound),
            _ => Err(InterestError::unknown(LabelKind::Regime, label)),
        }
    }
}

/// Direction of valuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Grow a present sum forward
    Future,
    /// Discount a future sum back to today
    Present,
}

impl FromStr for Direction {
    type Err = InterestError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_lowercase().as_str() {
            "future" | "fv" => Ok(Direction::Future),
            "present" | "pv" => Ok(Direction::Present),
            _ => Err(InterestError::unknown(LabelKind::Direction, label)),
        }
    }
}

/// One of the four formulas, fully configured apart from its inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Calculation {
    SimpleFuture,
    SimplePresent,
    CompoundFuture(CompoundingFrequency),
    CompoundPresent(CompoundingFrequency),
}

impl Calculation {
    /// Build a calculation from its parts. Compound calculations need a frequency.
    pub fn from_parts(
        regime: Regime,
        direction: Direction,
        frequency: Option<CompoundingFrequency>,
    ) -> Option<Self> {
        match (regime, direction) {
            (Regime::Simple, Direction::Future) => Some(Calculation::SimpleFuture),
            (Regime::Simple, Direction::Present) => Some(Calculation::SimplePresent),
            (Regime::Compound, Direction::Future) => frequency.map(Calculation::CompoundFuture),
            (Regime::Compound, Direction::Present) => frequency.map(Calculation::CompoundPresent),
        }
    }

    pub fn regime(&self) -> Regime {
        match self {
            Calculation::SimpleFuture | Calculation::SimplePresent => Regime::Simple,
            _ => Regime::Compound,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Calculation::SimpleFuture | Calculation::CompoundFuture(_) => Direction::Future,
            _ => Direction::Present,
        }
    }

    /// Evaluate against an amount (principal for FV, target for PV)
    pub fn evaluate(&self, amount: f64, annual_rate: f64, duration: Duration) -> InterestResult {
        match *self {
            Calculation::SimpleFuture => simple_future_value(amount, annual_rate, duration),
            Calculation::SimplePresent => simple_present_value(amount, annual_rate, duration),
            Calculation::CompoundFuture(freq) => {
                compound_future_value(amount, annual_rate, duration, freq)
            }
            Calculation::CompoundPresent(freq) => {
                compound_present_value(amount, annual_rate, duration, freq)
            }
        }
    }
}

/// Log each negative input once; the value is still evaluated as given
pub(super) fn warn_on_domain_edges(amount: f64, annual_rate: f64, duration: Duration) {
    if amount < 0.0 {
        log::warn!("Negative amount {} accepted as-is", amount);
    }
    if annual_rate < 0.0 {
        log::warn!("Negative annual rate {} will shrink values over time", annual_rate);
    }
    if duration.magnitude < 0.0 {
        log::warn!("Negative term {} {} accepted as-is", duration.magnitude, duration.unit.as_str());
    }
}

/// Growth factor (1 + r/n)^(n*t); the exponent may be fractional
fn compound_factor(annual_rate: f64, years: f64, frequency: CompoundingFrequency) -> f64 {
    let n = frequency.periods_per_year() as f64;
    (1.0 + annual_rate / n).powf(n * years)
}

pub(super) fn simple_future(principal: f64, annual_rate: f64, duration: Duration) -> InterestResult {
    let future_value = principal * (1.0 + annual_rate * duration.in_years());
    InterestResult {
        value: future_value,
        interest: future_value - principal,
    }
}

fn simple_present(future_value: f64, annual_rate: f64, duration: Duration) -> InterestResult {
    let present_value = future_value / (1.0 + annual_rate * duration.in_years());
    InterestResult {
        value: present_value,
        interest: future_value - present_value,
    }
}

pub(super) fn compound_future(
    principal: f64,
    annual_rate: f64,
    duration: Duration,
    frequency: CompoundingFrequency,
) -> InterestResult {
    let future_value = principal * compound_factor(annual_rate, duration.in_years(), frequency);
    InterestResult {
        value: future_value,
        interest: future_value - principal,
    }
}

fn compound_present(
    future_value: f64,
    annual_rate: f64,
    duration: Duration,
    frequency: CompoundingFrequency,
) -> InterestResult {
    let present_value = future_value / compound_factor(annual_rate, duration.in_years(), frequency);
    InterestResult {
        value: present_value,
        interest: future_value - present_value,
    }
}

/// Simple interest future value: FV = P(1 + rt)
pub fn simple_future_value(principal: f64, annual_rate: f64, duration: Duration) -> InterestResult {
    warn_on_domain_edges(principal, annual_rate, duration);
    simple_future(principal, annual_rate, duration)
}

/// Simple interest present value: PV = FV / (1 + rt)
pub fn simple_present_value(future_value: f64, annual_rate: f64, duration: Duration) -> InterestResult {
    warn_on_domain_edges(future_value, annual_rate, duration);
    simple_present(future_value, annual_rate, duration)
}

/// Compound interest future value: FV = P(1 + r/n)^(nt)
pub fn compound_future_value(
    principal: f64,
    annual_rate: f64,
    duration: Duration,
    frequency: CompoundingFrequency,
) -> InterestResult {
    warn_on_domain_edges(principal, annual_rate, duration);
    compound_future(principal, annual_rate, duration, frequency)
}

/// Compound interest present value: PV = FV / (1 + r/n)^(nt)
pub fn compound_present_value(
    future_value: f64,
    annual_rate: f64,
    duration: Duration,
    frequency: CompoundingFrequency,
) -> InterestResult {
    warn_on_domain_edges(future_value, annual_rate, duration);
    compound_present(future_value, annual_rate, duration, frequency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::count_warnings;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const PRINCIPALS: [f64; 4] = [0.0, 1.0, 10_000.0, 2_500_000.0];
    const RATES: [f64; 4] = [0.0, 0.01, 0.08, 0.25];
    const YEARS: [f64; 5] = [0.0, 0.25, 1.0, 3.7, 30.0];

    #[test]
    fn test_simple_future_value_matches_formula() {
        for &p in &PRINCIPALS {
            for &r in &RATES {
                for &t in &YEARS {
                    let result = simple_future_value(p, r, Duration::years(t));
                    assert_relative_eq!(result.value, p * (1.0 + r * t), max_relative = 1e-9);
                    assert_relative_eq!(result.interest, result.value - p, max_relative = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_simple_round_trip() {
        for &p in &PRINCIPALS {
            for &r in &RATES {
                for &t in &YEARS {
                    let d = Duration::years(t);
                    let fv = simple_future_value(p, r, d).value;
                    let pv = simple_present_value(fv, r, d).value;
                    assert_relative_eq!(pv, p, max_relative = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_compound_round_trip_every_frequency() {
        for freq in CompoundingFrequency::ALL {
            for &p in &PRINCIPALS {
                for &r in &RATES {
                    for &t in &YEARS {
                        let d = Duration::years(t);
                        let fv = compound_future_value(p, r, d, freq).value;
                        let pv = compound_present_value(fv, r, d, freq).value;
                        assert_relative_eq!(pv, p, max_relative = 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn test_compound_beats_simple_when_compounding_more_than_yearly() {
        // Holds from one year on; inside the first year a fractional exponent
        // sits below the straight line 1 + rt.
        let p = 10_000.0;
        for freq in CompoundingFrequency::ALL.iter().filter(|f| f.periods_per_year() > 1) {
            for &r in &[0.01, 0.08, 0.25] {
                let at_zero = Duration::years(0.0);
                assert_eq!(
                    compound_future_value(p, r, at_zero, *freq).value,
                    simple_future_value(p, r, at_zero).value
                );
                for &t in &[1.0, 2.0, 10.0, 30.0] {
                    let d = Duration::years(t);
                    let compound = compound_future_value(p, r, d, *freq).value;
                    let simple = simple_future_value(p, r, d).value;
                    assert!(compound > simple, "{:?} r={} t={}: {} <= {}", freq, r, t, compound, simple);
                }
            }
        }
    }

    #[test]
    fn test_zero_time_returns_principal() {
        let d = Duration::months(0.0);
        for &r in &RATES {
            assert_eq!(simple_future_value(1234.5, r, d).value, 1234.5);
            for freq in CompoundingFrequency::ALL {
                assert_eq!(compound_future_value(1234.5, r, d, freq).value, 1234.5);
            }
        }
    }

    #[test]
    fn test_zero_principal_is_degenerate_not_an_error() {
        let d = Duration::years(5.0);
        let simple = simple_future_value(0.0, 0.08, d);
        assert_eq!(simple.value, 0.0);
        assert_eq!(simple.interest, 0.0);

        let compound = compound_future_value(0.0, 0.08, d, CompoundingFrequency::Daily);
        assert_eq!(compound.value, 0.0);
        assert_eq!(compound.interest, 0.0);
    }

    #[test]
    fn test_zero_rate_means_no_growth() {
        let d = Duration::years(7.0);
        assert_eq!(simple_future_value(500.0, 0.0, d).value, 500.0);
        assert_eq!(
            compound_future_value(500.0, 0.0, d, CompoundingFrequency::Monthly).value,
            500.0
        );
    }

    #[test]
    fn test_negative_rate_decreases_value() {
        let d = Duration::years(2.0);
        let result = compound_future_value(1000.0, -0.05, d, CompoundingFrequency::Annual);
        assert_relative_eq!(result.value, 1000.0 * 0.95_f64.powi(2), max_relative = 1e-12);
        assert!(result.interest < 0.0);
    }

    #[test]
    fn test_negative_principal_is_mirrored() {
        let result = simple_future_value(-1000.0, 0.08, Duration::years(2.0));
        assert_relative_eq!(result.value, -1160.0, max_relative = 1e-12);
        assert_relative_eq!(result.interest, -160.0, max_relative = 1e-12);

        let compound = compound_future_value(-1000.0, 0.08, Duration::years(2.0), CompoundingFrequency::Annual);
        assert_relative_eq!(compound.value, -1000.0 * 1.08_f64.powi(2), max_relative = 1e-12);
    }

    #[test]
    fn test_negative_term_discounts() {
        let d = Duration::years(-1.0);
        let compound = compound_future_value(1000.0, 0.08, d, CompoundingFrequency::Annual);
        assert_relative_eq!(compound.value, 1000.0 / 1.08, max_relative = 1e-12);
        assert!(compound.interest < 0.0);

        let simple = simple_future_value(1000.0, 0.08, Duration::months(-6.0));
        assert_relative_eq!(simple.value, 960.0, max_relative = 1e-12);
    }

    #[test]
    fn test_negative_inputs_warn_once_per_call() {
        let (_, warnings) = count_warnings(|| simple_future_value(1000.0, -0.01, Duration::years(3.0)));
        assert_eq!(warnings, 1);

        let (_, warnings) = count_warnings(|| {
            compound_present_value(-1000.0, -0.01, Duration::years(-2.0), CompoundingFrequency::Monthly)
        });
        assert_eq!(warnings, 3);

        let (_, warnings) = count_warnings(|| simple_future_value(1000.0, 0.0, Duration::years(0.0)));
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_inventory_financing_three_months() {
        let result = simple_future_value(10_000.0, 0.10, Duration::months(3.0));
        assert_abs_diff_eq!(result.value, 10_250.0, epsilon = 1e-6);
        assert_abs_diff_eq!(result.interest, 250.0, epsilon = 1e-6);
    }

    #[test]
    fn test_compound_five_years_annual() {
        let result = compound_future_value(
            10_000.0,
            0.08,
            Duration::years(5.0),
            CompoundingFrequency::Annual,
        );
        assert_abs_diff_eq!(result.value, 14_693.28, epsilon = 0.01);
        assert_abs_diff_eq!(result.return_pct(10_000.0), 46.9328, epsilon = 1e-4);
    }

    #[test]
    fn test_compound_present_value_two_years() {
        let result = compound_present_value(
            20_000.0,
            0.06,
            Duration::years(2.0),
            CompoundingFrequency::Annual,
        );
        assert_abs_diff_eq!(result.value, 17_799.93, epsilon = 0.01);
        assert_abs_diff_eq!(result.interest, 2_200.07, epsilon = 0.01);
    }

    #[test]
    fn test_fractional_exponent() {
        // 18 months quarterly = 6 periods; 40 days monthly = 40*12/365 periods
        let quarterly = compound_future_value(1000.0, 0.04, Duration::months(18.0), CompoundingFrequency::Quarterly);
        assert_relative_eq!(quarterly.value, 1000.0 * 1.01_f64.powi(6), max_relative = 1e-9);

        let monthly = compound_future_value(1000.0, 0.12, Duration::days(40.0), CompoundingFrequency::Monthly);
        assert_relative_eq!(monthly.value, 1000.0 * 1.01_f64.powf(12.0 * 40.0 / 365.0), max_relative = 1e-12);
    }

    #[test]
    fn test_return_pct_zero_base() {
        let result = InterestResult { value: 10.0, interest: 10.0 };
        assert_eq!(result.return_pct(0.0), 0.0);
    }

    #[test]
    fn test_calculation_from_parts() {
        assert_eq!(
            Calculation::from_parts(Regime::Simple, Direction::Present, None),
            Some(Calculation::SimplePresent)
        );
        assert_eq!(Calculation::from_parts(Regime::Compound, Direction::Future, None), None);

        let calc = Calculation::from_parts(
            Regime::Compound,
            Direction::Present,
            Some(CompoundingFrequency::Annual),
        )
        .unwrap();
        assert_eq!(calc.regime(), Regime::Compound);
        assert_eq!(calc.direction(), Direction::Present);

        let result = calc.evaluate(20_000.0, 0.06, Duration::years(2.0));
        assert_abs_diff_eq!(result.value, 20_000.0 / 1.06_f64.powi(2), epsilon = 1e-9);
    }

    #[test]
    fn test_parse_regime_and_direction() {
        assert_eq!("Compound".parse::<Regime>().unwrap(), Regime::Compound);
        assert_eq!("pv".parse::<Direction>().unwrap(), Direction::Present);
        assert!("linear".parse::<Regime>().is_err());
        assert!("sideways".parse::<Direction>().is_err());
    }
}
