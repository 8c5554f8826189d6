//! CSV persistence of the patient table
//!
//! The table is written through Arrow's CSV writer with a header row and no
//! index column, and read back with the same schema.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use arrow::csv::{ReaderBuilder, WriterBuilder};
use log::{debug, info};

use crate::error::Result;
use crate::models::patient::PatientRecord;
use crate::models::traits::ArrowSchema;

/// Write `records` to `path`, replacing any existing file
pub fn write_csv(path: &Path, records: &[PatientRecord]) -> Result<()> {
    let batch = PatientRecord::to_record_batch(records)?;

    let file = File::create(path)?;
    let mut buffered = BufWriter::new(file);
    {
        let mut writer = WriterBuilder::new().with_header(true).build(&mut buffered);
        writer.write(&batch)?;
    }
    buffered.flush()?;

    info!("Wrote {} records to {}", batch.num_rows(), path.display());
    Ok(())
}

/// Read a table previously written by [`write_csv`]
pub fn read_csv(path: &Path) -> Result<Vec<PatientRecord>> {
    let file = File::open(path)?;
    let reader = ReaderBuilder::new(PatientRecord::schema_ref())
        .with_header(true)
        .build(BufReader::new(file))?;

    let mut records = Vec::new();
    for batch in reader {
        let batch = batch?;
        debug!("Read batch of {} rows from {}", batch.num_rows(), path.display());
        records.extend(PatientRecord::from_record_batch(&batch)?);
    }
    Ok(records)
}
