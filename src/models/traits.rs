//! Row types with a fixed columnar layout

use std::sync::Arc;

use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;

use crate::error::Result;

/// Rows that map onto a fixed set of typed Arrow columns.
///
/// The schema is the single source of the column names, their order and
/// their types: the CSV writer takes its header from it and the CSV reader
/// parses each column with it.
pub trait ArrowSchema: Sized {
    /// Columns in file order
    fn schema() -> Schema;

    /// Rebuild rows from a batch laid out as [`ArrowSchema::schema`]
    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>>;

    /// Pack `rows` into one batch, one column per schema field
    fn to_record_batch(rows: &[Self]) -> Result<RecordBatch>;

    /// Shared schema handle for readers that keep their own reference
    fn schema_ref() -> Arc<Schema> {
        Arc::new(Self::schema())
    }
}
