use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::debug;

use super::model::Dataset;
use crate::error::DatasetError;

/// Serialize `dataset` to `dataset.path`, replacing whatever is there.
///
/// The file is truncated and written in place; there is no temporary copy,
/// so a failure part-way through leaves the file incomplete.
pub fn write_csv(dataset: &Dataset) -> Result<(), DatasetError> {
    let write_err = |source: csv::Error| DatasetError::Write {
        path: dataset.path.clone(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_path(&dataset.path)
        .map_err(write_err)?;

    writer.write_record(&dataset.headers).map_err(write_err)?;
    for row in &dataset.rows {
        writer.write_record(row).map_err(write_err)?;
    }
    writer.flush().map_err(|source| DatasetError::WriteIo {
        path: dataset.path.clone(),
        source,
    })?;

    debug!("wrote {} rows to {}", dataset.len(), dataset.path.display());
    Ok(())
}
