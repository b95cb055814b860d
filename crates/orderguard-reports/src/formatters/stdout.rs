use orderguard_core::{CheckOutcome, DomainOutcome, Loaded, TableError, ValidationResult};

use crate::Reporter;

/// Human-readable console output.
///
/// Owns every literal report string; the core crate only produces
/// structured outcomes and findings.
pub struct StdOutFormatter;

impl Default for StdOutFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl StdOutFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_banner(&self) {
        println!("=== DATA QUALITY VALIDATION ===");
    }

    pub fn print_attempt_error(&self, error: &TableError) {
        println!("ERROR: {}", error);
    }

    pub fn print_load(&self, loaded: &Loaded) {
        if loaded.used_fallback() {
            println!("SUCCESS: Original CSV loaded as fallback");
            println!(
                "Data shape: ({}, {})",
                loaded.table.num_rows(),
                loaded.table.num_columns()
            );
        } else {
            println!("SUCCESS: CSV loaded");
            println!(
                "Data shape: ({}, {})",
                loaded.table.num_rows(),
                loaded.table.num_columns()
            );
            println!("Columns: {:?}", loaded.table.column_names());
        }
    }

    pub fn print_checks_start(&self) {
        println!("\n--- Running Validations ---");
    }

    pub fn print_check(&self, outcome: &CheckOutcome) {
        for line in narration(outcome) {
            println!("{}", line);
        }
    }

    pub fn print_summary(&self, result: &ValidationResult) {
        println!("\n=== VALIDATION RESULTS ===");

        if !result.warnings().is_empty() {
            println!("WARNINGS ({}):", result.warnings().len());
            for finding in result.warnings() {
                println!("  ⚠ {}", finding.message);
            }
        }

        if !result.errors().is_empty() {
            println!("ERRORS ({}):", result.errors().len());
            for finding in result.errors() {
                println!("  ❌ {}", finding.message);
            }
            println!("\nFAILED: Validation errors found");
        } else {
            println!("SUCCESS: All validations passed");
            if !result.warnings().is_empty() {
                println!("Note: {} warnings present", result.warnings().len());
            }
        }
    }
}

impl Reporter for StdOutFormatter {
    fn on_start(&self) {
        self.print_banner();
    }

    fn on_attempt_failed(&self, error: &TableError) {
        self.print_attempt_error(error);
    }

    fn on_load(&self, loaded: &Loaded) {
        self.print_load(loaded);
    }

    fn on_checks_start(&self) {
        self.print_checks_start();
    }

    fn on_check(&self, outcome: &CheckOutcome) {
        self.print_check(outcome);
    }

    fn on_summary(&self, result: &ValidationResult) {
        self.print_summary(result);
    }
}

/// Console narration for one check outcome. Missing columns produce no
/// line; they only surface in the warnings summary.
fn narration(outcome: &CheckOutcome) -> Vec<String> {
    match outcome {
        CheckOutcome::Nulls { counts } => {
            if counts.is_empty() {
                vec!["PASS: No null values found".to_string()]
            } else {
                counts
                    .iter()
                    .map(|c| format!("WARNING: {} null values in {}", c.nulls, c.column))
                    .collect()
            }
        }
        CheckOutcome::OrderIdUniqueness { unique, total } => {
            if unique < total {
                vec![format!(
                    "ERROR: Duplicate Order IDs found - {} unique out of {}",
                    unique, total
                )]
            } else {
                vec!["PASS: All Order IDs are unique".to_string()]
            }
        }
        CheckOutcome::NegativeQuantities { count } => {
            if *count > 0 {
                vec!["ERROR: Negative quantities found".to_string()]
            } else {
                vec!["PASS: All quantities are positive".to_string()]
            }
        }
        CheckOutcome::NegativeAmounts { count } => {
            if *count > 0 {
                vec!["ERROR: Negative amounts found".to_string()]
            } else {
                vec!["PASS: All amounts are positive".to_string()]
            }
        }
        CheckOutcome::CurrencyDomain(outcome) => match outcome {
            DomainOutcome::Uniform => vec!["PASS: All currencies are INR".to_string()],
            DomainOutcome::AllMissing => vec!["ERROR: All currency values are NaN".to_string()],
            DomainOutcome::Deviations(values) => {
                vec![format!("ERROR: Invalid currencies found: {:?}", values)]
            }
        },
        CheckOutcome::ShipCountryDomain(outcome) => match outcome {
            DomainOutcome::Uniform => vec!["PASS: All ship countries are IN".to_string()],
            DomainOutcome::AllMissing => {
                vec!["ERROR: All ship-country values are NaN".to_string()]
            }
            DomainOutcome::Deviations(values) => {
                vec![format!("ERROR: Invalid ship countries found: {:?}", values)]
            }
        },
        CheckOutcome::StatusDomain { invalid } => {
            if invalid.is_empty() {
                vec!["PASS: All status values are valid".to_string()]
            } else {
                vec![format!("ERROR: Invalid status values found: {:?}", invalid)]
            }
        }
        CheckOutcome::MissingColumn { .. } => Vec::new(),
    }
}
