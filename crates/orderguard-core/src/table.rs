use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

/// The in-memory order-records table.
///
/// Holds the schema derived from the CSV header (column names trimmed,
/// every field nullable Utf8) and the record batches read from disk.
/// Read-only for the remainder of the run.
#[derive(Debug)]
pub struct OrderTable {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
}

impl OrderTable {
    pub fn new(schema: SchemaRef, batches: Vec<RecordBatch>) -> Self {
        Self { schema, batches }
    }

    /// Total row count across batches.
    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(|batch| batch.num_rows()).sum()
    }

    pub fn num_columns(&self) -> usize {
        self.schema.fields().len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.schema
            .fields()
            .iter()
            .map(|field| field.name().as_str())
            .collect()
    }

    /// Index of a column in the schema, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.schema.column_with_name(name).map(|(idx, _)| idx)
    }

    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }
}
