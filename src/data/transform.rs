use super::model::Dataset;
use crate::error::DatasetError;

/// Outcome of rewriting one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformStats {
    /// Rows visited (equals the dataset length).
    pub rows: usize,
    /// Cells whose text actually changed.
    pub changed: usize,
}

/// Replace every cell of `column` with its lowercase form.
///
/// Uses Unicode default case mapping (`str::to_lowercase`), no locale rules.
/// If the column does not exist the dataset is left untouched.
pub fn lowercase_column(dataset: &mut Dataset, column: &str) -> Result<TransformStats, DatasetError> {
    let idx = dataset
        .column_index(column)
        .ok_or_else(|| DatasetError::MissingColumn {
            path: dataset.path.clone(),
            column: column.to_string(),
        })?;

    let mut stats = TransformStats::default();
    for row in &mut dataset.rows {
        stats.rows += 1;
        if let Some(cell) = row.get_mut(idx) {
            let lower = cell.to_lowercase();
            if lower != *cell {
                *cell = lower;
                stats.changed += 1;
            }
        }
    }

    Ok(stats)
}
