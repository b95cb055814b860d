use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::Arc;

use arrow::csv::ReaderBuilder as CsvReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::TableError;
use crate::readers::ReaderConfig;
use crate::table::OrderTable;

/// Parsing leniency for one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Reject rows that do not match the header
    Strict,
    /// Tolerate rows with fewer fields than the header
    Lenient,
}

/// Field contents mapped to missing values at read time.
const NULL_TOKENS: &str = r"^(?:|NA|N/A|NaN|null)$";

static NULL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Constant pattern, covered by tests
    Regex::new(NULL_TOKENS).expect("null token pattern")
});

/// Generate an all-Utf8, all-nullable schema from the CSV header.
///
/// Column names are trimmed of surrounding whitespace here, so every
/// later lookup operates on clean names.
pub fn generate_schema(path: &str) -> Result<Schema, TableError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    match lines.next() {
        Some(first) => {
            let header = first?;
            let fields: Vec<Field> = header
                .split(',')
                .map(|c| Field::new(c.trim(), DataType::Utf8, true))
                .collect();
            Ok(Schema::new(fields))
        }
        None => Err(TableError::EmptyFile(path.to_string())),
    }
}

/// Read a CSV file into an [`OrderTable`].
///
/// Every cell is read as a nullable string; empty fields and the common
/// NA spellings become nulls, which is the only representation of a
/// missing value in the system.
pub fn read_table(
    path: &str,
    mode: ParseMode,
    config: &ReaderConfig,
) -> Result<OrderTable, TableError> {
    let schema = Arc::new(generate_schema(path)?);

    let mut format = Format::default()
        .with_header(true)
        .with_null_regex(NULL_REGEX.clone());
    if mode == ParseMode::Lenient {
        format = format.with_truncated_rows(true);
    }

    let file = File::open(path)?;
    let reader = CsvReaderBuilder::new(schema.clone())
        .with_format(format)
        .with_batch_size(config.batch_size)
        .build(file)?;

    let batches = reader.collect::<Result<Vec<_>, _>>()?;
    Ok(OrderTable::new(schema, batches))
}
