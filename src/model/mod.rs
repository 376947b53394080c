use std::collections::HashSet;

/// Prefix given to header cells that carry no label.
pub const UNNAMED_PREFIX: &str = "Unnamed: ";

/// An in-memory table loaded from a worksheet: one header row plus data rows,
/// every cell already rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Builds a dataset from the raw header labels of a sheet.
    ///
    /// Blank labels are replaced by `Unnamed: <index>`, repeated labels get a
    /// `.N` suffix, and the result is normalised with
    /// [`normalize_column_name`]. Rows are padded or truncated to the header
    /// width so every record has one cell per column.
    pub fn from_raw_headers(headers: &[String], rows: Vec<Vec<String>>) -> Self {
        let columns: Vec<String> = label_headers(headers)
            .iter()
            .map(|label| normalize_column_name(label))
            .collect();

        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the sheet had neither a header nor data.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }
}

/// Trims surrounding whitespace and lowercases a column label.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Assigns a usable label to every header cell before normalisation.
pub fn label_headers(headers: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut labels = Vec::with_capacity(headers.len());

    for (index, header) in headers.iter().enumerate() {
        let base = if header.is_empty() {
            format!("{UNNAMED_PREFIX}{index}")
        } else {
            header.clone()
        };

        let mut label = base.clone();
        let mut suffix = 1;
        while seen.contains(&label) {
            label = format!("{base}.{suffix}");
            suffix += 1;
        }

        seen.insert(label.clone());
        labels.push(label);
    }

    labels
}
