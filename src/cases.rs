//! Worked business cases for financing and investment decisions
//!
//! Each case bundles a named scenario with the calculation it calls for, so
//! the CLI can print them and tests can pin their published figures.

use serde::Serialize;

use crate::engine::{Calculation, InterestResult};
use crate::terms::{CompoundingFrequency, Duration};

/// Whether the case is a cost of borrowing or a return on investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaseCategory {
    Business,
    Investment,
}

/// A named worked scenario
#[derive(Debug, Clone, Serialize)]
pub struct WorkedCase {
    pub name: &'static str,
    pub description: &'static str,
    pub category: CaseCategory,
    pub calculation: Calculation,
    pub amount: f64,
    /// Fractional annual rate
    pub annual_rate: f64,
    pub duration: Duration,
}

impl WorkedCase {
    pub fn evaluate(&self) -> InterestResult {
        self.calculation.evaluate(self.amount, self.annual_rate, self.duration)
    }
}

/// All worked cases, business financing first
pub fn catalogue() -> Vec<WorkedCase> {
    vec![
        WorkedCase {
            name: "Inventory financing",
            description: "Raw material purchase financed for one quarter",
            category: CaseCategory::Business,
            calculation: Calculation::SimpleFuture,
            amount: 10_000.0,
            annual_rate: 0.10,
            duration: Duration::months(3.0),
        },
        WorkedCase {
            name: "Import financing",
            description: "Imported stock paid on a three month credit line",
            category: CaseCategory::Business,
            calculation: Calculation::SimpleFuture,
            amount: 10_000.0,
            annual_rate: 0.05,
            duration: Duration::months(3.0),
        },
        WorkedCase {
            name: "Late invoice interest",
            description: "Overdue receivable charged for fifteen days",
            category: CaseCategory::Business,
            calculation: Calculation::SimpleFuture,
            amount: 500.0,
            annual_rate: 0.02,
            duration: Duration::days(15.0),
        },
        WorkedCase {
            name: "Expansion savings",
            description: "Long-term savings set aside for growth",
            category: CaseCategory::Investment,
            calculation: Calculation::CompoundFuture(CompoundingFrequency::Annual),
            amount: 10_000.0,
            annual_rate: 0.08,
            duration: Duration::years(5.0),
        },
        WorkedCase {
            name: "Growth loan",
            description: "Three year loan repaid at maturity",
            category: CaseCategory::Investment,
            calculation: Calculation::CompoundFuture(CompoundingFrequency::Annual),
            amount: 20_000.0,
            annual_rate: 0.05,
            duration: Duration::years(3.0),
        },
        WorkedCase {
            name: "Target planning",
            description: "Amount to invest today to hold 20,000 in two years",
            category: CaseCategory::Investment,
            calculation: Calculation::CompoundPresent(CompoundingFrequency::Annual),
            amount: 20_000.0,
            annual_rate: 0.06,
            duration: Duration::years(2.0),
        },
    ]
}
