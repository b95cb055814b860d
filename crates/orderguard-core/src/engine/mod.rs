//! The fixed check battery.
//!
//! Each check is independent: a missing column or a violation in one
//! check never blocks the others. Checks run once, in a fixed order,
//! and produce structured outcomes; narration and findings derive from
//! the outcomes afterward.

use arrow::compute;
use arrow::datatypes::{Float64Type, Int64Type};
use arrow_array::{Array, ArrowNumericType, PrimitiveArray, StringArray};
use num_traits::Zero;

use crate::columns::{
    ALLOWED_STATUSES, AMOUNT, CURRENCY, EXPECTED_CURRENCY, EXPECTED_SHIP_COUNTRY, ORDER_ID, QTY,
    SHIP_COUNTRY, STATUS,
};
use crate::errors::TableError;
use crate::results::{CheckOutcome, DomainOutcome, NullCount, ValidationResult};
use crate::rules::{ConstantCheck, MembershipCheck, NegativeCheck, NullCheck, UnicityCheck};
use crate::table::OrderTable;


/// Run the full battery against a loaded table.
pub fn run_checks(table: &OrderTable) -> Result<ValidationResult, TableError> {
    let outcomes = vec![
        check_nulls(table),
        check_order_id(table)?,
        check_quantities(table)?,
        check_amounts(table)?,
        check_currency(table)?,
        check_ship_country(table)?,
        check_status(table)?,
    ];
    Ok(ValidationResult::from_outcomes(outcomes))
}

/// Check 1: count missing values in every column.
fn check_nulls(table: &OrderTable) -> CheckOutcome {
    let rule = NullCheck;
    let mut counts = Vec::new();
    for (idx, field) in table.schema().fields().iter().enumerate() {
        let nulls: usize = table
            .batches()
            .iter()
            .map(|batch| rule.validate(batch.column(idx).as_ref()))
            .sum();
        if nulls > 0 {
            counts.push(NullCount {
                column: field.name().clone(),
                nulls,
            });
        }
    }
    CheckOutcome::Nulls { counts }
}

/// Check 2: Order ID values must be unique across the table.
///
/// Distinct values are counted over non-missing cells; the total is the
/// full row count, so missing identifiers also surface as duplicates.
fn check_order_id(table: &OrderTable) -> Result<CheckOutcome, TableError> {
    let Some(idx) = table.column_index(ORDER_ID) else {
        return Ok(missing(ORDER_ID));
    };
    let mut rule = UnicityCheck::new();
    for batch in table.batches() {
        rule.scan(string_column(batch.column(idx).as_ref(), ORDER_ID)?);
    }
    Ok(CheckOutcome::OrderIdUniqueness {
        unique: rule.distinct(),
        total: table.num_rows(),
    })
}

/// Check 3: quantities must not be negative.
fn check_quantities(table: &OrderTable) -> Result<CheckOutcome, TableError> {
    let Some(idx) = table.column_index(QTY) else {
        return Ok(missing(QTY));
    };
    let count = count_negatives::<Int64Type>(table, idx, QTY)?;
    Ok(CheckOutcome::NegativeQuantities { count })
}

/// Check 4: amounts must not be negative.
fn check_amounts(table: &OrderTable) -> Result<CheckOutcome, TableError> {
    let Some(idx) = table.column_index(AMOUNT) else {
        return Ok(missing(AMOUNT));
    };
    let count = count_negatives::<Float64Type>(table, idx, AMOUNT)?;
    Ok(CheckOutcome::NegativeAmounts { count })
}

/// Check 5: every non-missing currency must be the expected constant.
fn check_currency(table: &OrderTable) -> Result<CheckOutcome, TableError> {
    let Some(idx) = table.column_index(CURRENCY) else {
        return Ok(missing(CURRENCY));
    };
    let outcome = check_domain(table, idx, CURRENCY, EXPECTED_CURRENCY)?;
    Ok(CheckOutcome::CurrencyDomain(outcome))
}

/// Check 6: every non-missing ship country must be the expected constant.
fn check_ship_country(table: &OrderTable) -> Result<CheckOutcome, TableError> {
    let Some(idx) = table.column_index(SHIP_COUNTRY) else {
        return Ok(missing(SHIP_COUNTRY));
    };
    let outcome = check_domain(table, idx, SHIP_COUNTRY, EXPECTED_SHIP_COUNTRY)?;
    Ok(CheckOutcome::ShipCountryDomain(outcome))
}

/// Check 7: every non-missing status must belong to the allowed set.
fn check_status(table: &OrderTable) -> Result<CheckOutcome, TableError> {
    let Some(idx) = table.column_index(STATUS) else {
        return Ok(missing(STATUS));
    };
    let mut rule = MembershipCheck::new(&ALLOWED_STATUSES);
    for batch in table.batches() {
        rule.scan(string_column(batch.column(idx).as_ref(), STATUS)?);
    }
    Ok(CheckOutcome::StatusDomain {
        invalid: rule.finish(),
    })
}

fn missing(column: &str) -> CheckOutcome {
    CheckOutcome::MissingColumn {
        column: column.to_string(),
    }
}

fn string_column<'a>(array: &'a dyn Array, column: &str) -> Result<&'a StringArray, TableError> {
    array
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| TableError::TypeCastError(column.to_string(), "Utf8".to_string()))
}

/// Cast a Utf8 column to the target numeric type and count negatives.
///
/// The cast is lenient: cells that do not parse become nulls, and nulls
/// never count as negative.
fn count_negatives<T>(table: &OrderTable, idx: usize, column: &str) -> Result<usize, TableError>
where
    T: ArrowNumericType,
    T::Native: Zero + PartialOrd,
{
    let rule = NegativeCheck;
    let mut count = 0;
    for batch in table.batches() {
        let casted = compute::cast(batch.column(idx), &T::DATA_TYPE)?;
        let array = casted
            .as_any()
            .downcast_ref::<PrimitiveArray<T>>()
            .ok_or_else(|| {
                TableError::TypeCastError(column.to_string(), T::DATA_TYPE.to_string())
            })?;
        count += rule.validate(array);
    }
    Ok(count)
}

fn check_domain(
    table: &OrderTable,
    idx: usize,
    column: &str,
    expected: &'static str,
) -> Result<DomainOutcome, TableError> {
    let mut rule = ConstantCheck::new(expected);
    for batch in table.batches() {
        rule.scan(string_column(batch.column(idx).as_ref(), column)?);
    }
    Ok(rule.finish())
}
