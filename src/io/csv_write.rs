use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::model::Dataset;

/// Writes the dataset to the given path as comma-delimited text.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    let file = File::create(path)?;
    write_records(file, dataset)
}

/// Writes a header row of column names followed by one line per record. No
/// index column is emitted. An empty dataset produces no output at all.
pub fn write_records<W: Write>(writer: W, dataset: &Dataset) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    if dataset.is_empty() {
        return Ok(());
    }

    csv_writer.write_record(&dataset.columns)?;

    for row in &dataset.rows {
        csv_writer.write_record(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}
