use std::path::PathBuf;

use log::info;

use crate::config::PipelineConfig;
use crate::data::loader::load_csv;
use crate::data::model::Dataset;
use crate::data::transform::lowercase_column;
use crate::data::writer::write_csv;
use crate::error::DatasetError;

/// Per-file summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub label: String,
    pub path: PathBuf,
    pub rows: usize,
    pub changed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub files: Vec<FileReport>,
}

impl PipelineReport {
    pub fn rows(&self) -> usize {
        self.files.iter().map(|f| f.rows).sum()
    }

    pub fn changed(&self) -> usize {
        self.files.iter().map(|f| f.changed).sum()
    }
}

/// Lowercase `config.column` in every configured input and write each file
/// back to where it came from.
///
/// Runs in three passes: load every file, transform every dataset, then
/// write. Any load or schema error therefore aborts before a single file is
/// overwritten. A write error aborts immediately; files written before it
/// stay rewritten.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport, DatasetError> {
    let mut datasets: Vec<Dataset> = Vec::with_capacity(config.inputs.len());
    for input in &config.inputs {
        let ds = load_csv(&input.path)?;
        if ds.is_empty() {
            info!("read {} from {}: header only", input.label, input.path.display());
        } else {
            info!("read {} ({} rows) from {}", input.label, ds.len(), input.path.display());
        }
        datasets.push(ds);
    }

    let mut report = PipelineReport::default();
    for (input, ds) in config.inputs.iter().zip(datasets.iter_mut()) {
        let stats = lowercase_column(ds, &config.column)?;
        report.files.push(FileReport {
            label: input.label.clone(),
            path: input.path.clone(),
            rows: stats.rows,
            changed: stats.changed,
        });
    }

    for (file, ds) in report.files.iter().zip(&datasets) {
        write_csv(ds)?;
        info!(
            "wrote {} ({}): {} of {} '{}' values lowercased",
            file.label,
            file.path.display(),
            file.changed,
            file.rows,
            config.column
        );
    }

    Ok(report)
}
