use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dataset – one CSV file held in memory
// ---------------------------------------------------------------------------

/// The full contents of one CSV file: header row plus data rows in file order.
///
/// Cells are kept as the raw text read from disk. Nothing is type-guessed, so
/// every column the transform does not touch is written back exactly as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// File the dataset was loaded from and will be written back to.
    pub path: PathBuf,
    /// Column names, in header order.
    pub headers: Vec<String>,
    /// Data rows; each row has `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(path: impl Into<PathBuf>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Dataset {
            path: path.into(),
            headers,
            rows,
        }
    }

    /// Position of the column whose header is exactly `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the file holds a header only.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// DatasetSpec – one configured input
// ---------------------------------------------------------------------------

/// A named input file, e.g. `male` → `data/male.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSpec {
    pub label: String,
    pub path: PathBuf,
}

impl DatasetSpec {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        DatasetSpec {
            label: label.into(),
            path: path.into(),
        }
    }
}
