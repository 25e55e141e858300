//! Error handling for WorktopKit core
//!
//! The pricing and geometry engine itself never fails: malformed input
//! degrades to zero and unknown ids are ignored. The only error here is a
//! rule set that cannot produce a meaningful price, reported by
//! `PricingRules::validate`.

use thiserror::Error;

/// Pricing rule error type
///
/// Raised when a configured rate cannot produce a meaningful price.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleError {
    /// A rate is NaN or infinite
    #[error("Rate '{name}' must be finite, got {value}")]
    NotFinite {
        /// The rate name.
        name: String,
        /// The offending value.
        value: f64,
    },

    /// A rate is below zero
    #[error("Rate '{name}' must not be negative, got {value}")]
    Negative {
        /// The rate name.
        name: String,
        /// The offending value.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_error_display() {
        let err = RuleError::Negative {
            name: "edge_rate_per_m".to_string(),
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "Rate 'edge_rate_per_m' must not be negative, got -1"
        );
    }
}
