pub mod columns;
pub mod engine;
pub mod errors;
pub mod findings;
pub mod loader;
pub mod readers;
pub mod results;
pub mod rules;
pub mod table;
pub mod utils;

pub use engine::run_checks;
pub use errors::TableError;
pub use findings::{Finding, Severity};
pub use loader::{LoadAttempt, LoadFailure, Loaded, load_first_available};
pub use readers::{ParseMode, ReaderConfig};
pub use results::{CheckOutcome, DomainOutcome, NullCount, ValidationResult};
pub use table::OrderTable;
