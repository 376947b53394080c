use std::path::{Path, PathBuf};

use tracing::{debug, error, info, instrument};

use crate::error::{Result, ToolError};
use crate::io::{csv_write, excel_read};

/// Output path used when no destination is given: the source path with its
/// extension replaced by `csv`.
pub fn default_destination(source: &Path) -> PathBuf {
    source.with_extension("csv")
}

/// Converts the first worksheet of `source` into a CSV file with normalised
/// column names and returns the path that was written.
#[instrument(level = "info", skip_all, fields(source = %source.display()))]
pub fn convert_to_csv(source: &Path, destination: Option<&Path>) -> Result<PathBuf> {
    let destination = match destination {
        Some(path) => path.to_path_buf(),
        None => {
            let derived = default_destination(source);
            if derived.as_path() == source {
                return Err(ToolError::DestinationIsSource(derived));
            }
            derived
        }
    };

    let dataset = excel_read::read_dataset(source)?;
    info!(
        rows = dataset.row_count(),
        columns = dataset.columns.len(),
        "read dataset from workbook"
    );
    debug!(columns = ?dataset.columns, "normalised column names");

    csv_write::write_dataset(&destination, &dataset)?;
    info!(destination = %destination.display(), "wrote CSV output");
    Ok(destination)
}

/// Top-level conversion routine. Failures are reported on the console and
/// collapsed into `None`; on success the written path is returned.
pub fn convert_excel_to_csv(source: &Path, destination: Option<&Path>) -> Option<PathBuf> {
    match convert_to_csv(source, destination) {
        Ok(written) => {
            println!(
                "Successfully converted {} to {}",
                source.display(),
                written.display()
            );
            Some(written)
        }
        Err(err) => {
            error!(error = %err, source = %source.display(), "conversion failed");
            eprintln!("Error converting file: {err}");
            None
        }
    }
}
