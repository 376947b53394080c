use std::path::Path;

use calamine::{DataType, Range, Reader, open_workbook_auto};
use tracing::debug;

use crate::error::{Result, ToolError};
use crate::model::Dataset;

/// Reads the first worksheet of a spreadsheet into a [`Dataset`].
///
/// The format (xlsx, xlsm, xlsb, xls or ods) is chosen from the file
/// extension. The first row of the sheet is the header row; every following
/// row of the used range becomes a record.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(ToolError::MissingInput(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ToolError::InvalidWorkbook("workbook contains no worksheets".into()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .ok_or_else(|| ToolError::InvalidWorkbook(format!("missing sheet '{sheet_name}'")))?
        .map_err(ToolError::from)?;

    debug!(sheet = %sheet_name, rows = range.height(), columns = range.width(), "loaded worksheet");
    Ok(range_to_dataset(&range))
}

fn range_to_dataset(range: &Range<DataType>) -> Dataset {
    // The used range starts at the first non-empty cell; columns to its left
    // still belong to the sheet.
    let leading_columns = range.start().map_or(0, |(_, col)| col as usize);
    let render_row = |row: &[DataType]| -> Vec<String> {
        std::iter::repeat_n(String::new(), leading_columns)
            .chain(row.iter().map(cell_to_string))
            .collect()
    };

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(first_row) => render_row(first_row),
        None => return Dataset::default(),
    };
    let records = rows.map(&render_row).collect();

    Dataset::from_raw_headers(&headers, records)
}

/// Renders a cell the way it appears in the CSV output.
pub fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::String(value) => value.clone(),
        DataType::Float(value) => value.to_string(),
        DataType::Int(value) => value.to_string(),
        DataType::Bool(true) => "True".to_string(),
        DataType::Bool(false) => "False".to_string(),
        DataType::DateTime(_) => match cell.as_datetime() {
            Some(datetime) => {
                let text = datetime.to_string();
                match text.strip_suffix(" 00:00:00") {
                    Some(date) => date.to_string(),
                    None => text,
                }
            }
            None => cell.to_string(),
        },
        DataType::Empty => String::new(),
        other => other.to_string(),
    }
}
