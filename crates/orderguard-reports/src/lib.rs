pub mod formatters;

pub use formatters::stdout::StdOutFormatter;

use orderguard_core::{CheckOutcome, Loaded, TableError, ValidationResult};

/// Callbacks emitted over the lifetime of a validation run.
pub trait Reporter {
    fn on_start(&self);
    fn on_attempt_failed(&self, error: &TableError);
    fn on_load(&self, loaded: &Loaded);
    fn on_checks_start(&self);
    fn on_check(&self, outcome: &CheckOutcome);
    fn on_summary(&self, result: &ValidationResult);
}
