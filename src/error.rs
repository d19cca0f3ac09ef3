//! Error types for label parsing and request loading

use thiserror::Error;

/// Which kind of label failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    TimeUnit,
    Frequency,
    Regime,
    Direction,
}

impl std::fmt::Display for LabelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LabelKind::TimeUnit => "time unit",
            LabelKind::Frequency => "compounding frequency",
            LabelKind::Regime => "interest regime",
            LabelKind::Direction => "valuation direction",
        };
        f.write_str(name)
    }
}

/// Errors raised at the boundary of the interest engine.
///
/// The formulas themselves never fail; every variant here comes from turning
/// caller-supplied text into typed inputs.
#[derive(Debug, Error)]
pub enum InterestError {
    /// Unrecognized label. There is no safe default for a financial multiplier.
    #[error("Invalid configuration: unknown {kind} '{label}'")]
    InvalidConfiguration {
        /// What the label was supposed to name
        kind: LabelKind,
        /// The label as received
        label: String,
    },

    /// A request row that cannot be evaluated
    #[error("Invalid request on line {line}: {reason}")]
    InvalidRequest { line: u64, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InterestError {
    pub(crate) fn unknown(kind: LabelKind, label: &str) -> Self {
        InterestError::InvalidConfiguration {
            kind,
            label: label.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InterestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_message() {
        let err = InterestError::unknown(LabelKind::Frequency, "Biweekly");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: unknown compounding frequency 'Biweekly'"
        );
    }
}
