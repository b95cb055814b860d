//! Ordered load plan for the order-records dataset.
//!
//! The dataset is tried from an explicit list of (path, parse mode)
//! attempts. The first success wins; exhausting the list is the only
//! unconditionally fatal condition in the system.

use thiserror::Error;

use crate::errors::TableError;
use crate::readers::{ParseMode, ReaderConfig, read_table};
use crate::table::OrderTable;

/// One entry of the load plan.
#[derive(Debug, Clone)]
pub struct LoadAttempt {
    pub path: String,
    pub mode: ParseMode,
}

impl LoadAttempt {
    pub fn strict(path: &str) -> Self {
        Self {
            path: path.to_string(),
            mode: ParseMode::Strict,
        }
    }

    pub fn lenient(path: &str) -> Self {
        Self {
            path: path.to_string(),
            mode: ParseMode::Lenient,
        }
    }
}

/// A successfully loaded table, with the history of failed attempts.
#[derive(Debug)]
pub struct Loaded {
    pub table: OrderTable,
    pub source: String,
    pub attempt: usize,
    pub failures: Vec<(String, TableError)>,
}

impl Loaded {
    /// Whether a fallback source supplied the table.
    pub fn used_fallback(&self) -> bool {
        self.attempt > 0
    }
}

/// Every load attempt failed; no table could be obtained.
#[derive(Error, Debug)]
#[error("all {} load attempts failed", .failures.len())]
pub struct LoadFailure {
    pub failures: Vec<(String, TableError)>,
}

/// Try each attempt in order, returning the first table that loads.
pub fn load_first_available(
    attempts: &[LoadAttempt],
    config: &ReaderConfig,
) -> Result<Loaded, LoadFailure> {
    let mut failures = Vec::new();
    for (attempt, entry) in attempts.iter().enumerate() {
        match read_table(&entry.path, entry.mode, config) {
            Ok(table) => {
                return Ok(Loaded {
                    table,
                    source: entry.path.clone(),
                    attempt,
                    failures,
                });
            }
            Err(err) => failures.push((entry.path.clone(), err)),
        }
    }
    Err(LoadFailure { failures })
}
