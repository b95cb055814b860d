use crate::columns::{AMOUNT, CURRENCY, ORDER_ID, QTY, SHIP_COUNTRY, STATUS};
use crate::findings::{Finding, Severity};

/// Null tally for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullCount {
    pub column: String,
    pub nulls: usize,
}

/// Outcome of a domain check against a single expected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainOutcome {
    /// Every non-missing value equals the expected constant
    Uniform,
    /// The column holds no non-missing values at all
    AllMissing,
    /// Distinct deviating values, in first-appearance order
    Deviations(Vec<String>),
}

/// Structured outcome of one check of the battery.
///
/// Narration lines and findings both derive from these; the core never
/// prints anything itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Nulls { counts: Vec<NullCount> },
    OrderIdUniqueness { unique: usize, total: usize },
    NegativeQuantities { count: usize },
    NegativeAmounts { count: usize },
    CurrencyDomain(DomainOutcome),
    ShipCountryDomain(DomainOutcome),
    StatusDomain { invalid: Vec<String> },
    MissingColumn { column: String },
}

impl CheckOutcome {
    /// Findings recorded for this outcome, in insertion order.
    pub fn findings(&self) -> Vec<Finding> {
        match self {
            CheckOutcome::Nulls { counts } => counts
                .iter()
                .map(|c| {
                    Finding::warning(
                        Some(c.column.clone()),
                        format!("Null values in {}: {}", c.column, c.nulls),
                    )
                })
                .collect(),
            CheckOutcome::OrderIdUniqueness { unique, total } => {
                if unique < total {
                    vec![Finding::error(
                        Some(ORDER_ID.to_string()),
                        format!("Duplicate Order IDs: {} unique out of {}", unique, total),
                    )]
                } else {
                    Vec::new()
                }
            }
            CheckOutcome::NegativeQuantities { count } => {
                if *count > 0 {
                    vec![Finding::error(
                        Some(QTY.to_string()),
                        "Negative quantities found in Qty column".to_string(),
                    )]
                } else {
                    Vec::new()
                }
            }
            CheckOutcome::NegativeAmounts { count } => {
                if *count > 0 {
                    vec![Finding::error(
                        Some(AMOUNT.to_string()),
                        "Negative amounts found in Amount column".to_string(),
                    )]
                } else {
                    Vec::new()
                }
            }
            CheckOutcome::CurrencyDomain(outcome) => match outcome {
                DomainOutcome::Uniform => Vec::new(),
                DomainOutcome::AllMissing => vec![Finding::error(
                    Some(CURRENCY.to_string()),
                    "All currency values are NaN".to_string(),
                )],
                DomainOutcome::Deviations(values) => vec![Finding::error(
                    Some(CURRENCY.to_string()),
                    format!("Invalid currencies found: {:?}", values),
                )],
            },
            CheckOutcome::ShipCountryDomain(outcome) => match outcome {
                DomainOutcome::Uniform => Vec::new(),
                DomainOutcome::AllMissing => vec![Finding::error(
                    Some(SHIP_COUNTRY.to_string()),
                    "All ship-country values are NaN".to_string(),
                )],
                DomainOutcome::Deviations(values) => vec![Finding::error(
                    Some(SHIP_COUNTRY.to_string()),
                    format!("Invalid ship countries found: {:?}", values),
                )],
            },
            CheckOutcome::StatusDomain { invalid } => {
                if invalid.is_empty() {
                    Vec::new()
                } else {
                    vec![Finding::error(
                        Some(STATUS.to_string()),
                        format!("Invalid status values: {:?}", invalid),
                    )]
                }
            }
            CheckOutcome::MissingColumn { column } => vec![Finding::warning(
                Some(column.clone()),
                format!("{} column not found", column),
            )],
        }
    }
}

/// Aggregated result of a full battery run.
///
/// Holds the ordered outcomes plus the findings partitioned by severity,
/// both in insertion order.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    outcomes: Vec<CheckOutcome>,
    warnings: Vec<Finding>,
    errors: Vec<Finding>,
}

impl ValidationResult {
    pub fn from_outcomes(outcomes: Vec<CheckOutcome>) -> Self {
        let mut warnings = Vec::new();
        let mut errors = Vec::new();
        for outcome in &outcomes {
            for finding in outcome.findings() {
                match finding.severity {
                    Severity::Warning => warnings.push(finding),
                    Severity::Error => errors.push(finding),
                }
            }
        }
        Self {
            outcomes,
            warnings,
            errors,
        }
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    /// A run passes when no error was recorded; warnings are permitted.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids_produce_no_finding() {
        let outcome = CheckOutcome::OrderIdUniqueness {
            unique: 3,
            total: 3,
        };
        assert!(outcome.findings().is_empty());
    }

    #[test]
    fn test_duplicate_ids_message() {
        let outcome = CheckOutcome::OrderIdUniqueness {
            unique: 2,
            total: 3,
        };
        let findings = outcome.findings();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].message, "Duplicate Order IDs: 2 unique out of 3");
    }

    #[test]
    fn test_null_counts_one_warning_per_column() {
        let outcome = CheckOutcome::Nulls {
            counts: vec![
                NullCount {
                    column: "currency".to_string(),
                    nulls: 2,
                },
                NullCount {
                    column: "Status".to_string(),
                    nulls: 1,
                },
            ],
        };
        let findings = outcome.findings();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].message, "Null values in currency: 2");
        assert_eq!(findings[1].message, "Null values in Status: 1");
        assert!(findings.iter().all(|f| f.severity == Severity::Warning));
    }

    #[test]
    fn test_domain_deviation_messages() {
        let outcome =
            CheckOutcome::CurrencyDomain(DomainOutcome::Deviations(vec!["USD".to_string()]));
        assert_eq!(
            outcome.findings()[0].message,
            "Invalid currencies found: [\"USD\"]"
        );

        let outcome = CheckOutcome::ShipCountryDomain(DomainOutcome::AllMissing);
        assert_eq!(
            outcome.findings()[0].message,
            "All ship-country values are NaN"
        );
    }

    #[test]
    fn test_missing_column_is_a_warning() {
        let outcome = CheckOutcome::MissingColumn {
            column: "Status".to_string(),
        };
        let findings = outcome.findings();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].message, "Status column not found");
    }

    #[test]
    fn test_result_partitions_by_severity() {
        let result = ValidationResult::from_outcomes(vec![
            CheckOutcome::MissingColumn {
                column: "Qty".to_string(),
            },
            CheckOutcome::OrderIdUniqueness {
                unique: 1,
                total: 2,
            },
        ]);
        assert_eq!(result.warnings().len(), 1);
        assert_eq!(result.errors().len(), 1);
        assert!(!result.passed());
    }

    #[test]
    fn test_warnings_alone_pass() {
        let result = ValidationResult::from_outcomes(vec![CheckOutcome::MissingColumn {
            column: "Status".to_string(),
        }]);
        assert!(result.passed());
    }
}
