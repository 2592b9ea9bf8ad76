use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use super::model::Dataset;
use crate::error::DatasetError;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Read a whole CSV file into memory.
///
/// Layout: comma-delimited, first row is the header. A row shorter than the
/// header is padded with empty cells; a row longer than the header is an
/// error. Cells are kept verbatim (no trimming, no type guessing).
pub fn load_csv(path: &Path) -> Result<Dataset, DatasetError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => DatasetError::NotFound {
            path: path.to_path_buf(),
        },
        _ => DatasetError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let parse_err = |source: csv::Error| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_err)?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches('\u{feff}').to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(parse_err)?;
        if record.len() > headers.len() {
            return Err(DatasetError::TooManyFields {
                path: path.to_path_buf(),
                line: record.position().map_or(0, |p| p.line()),
                expected: headers.len(),
                found: record.len(),
            });
        }
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    debug!(
        "loaded {}: {} columns, {} rows",
        path.display(),
        headers.len(),
        rows.len()
    );

    Ok(Dataset::new(path, headers, rows))
}
