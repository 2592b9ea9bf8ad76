mod config;
mod data;
mod error;
mod pipeline;

use anyhow::{Context, Result};
use log::info;

use config::PipelineConfig;

const CONFIRMATION: &str = "Names have been converted to lowercase in both files.";

fn main() -> Result<()> {
    env_logger::init();

    let cwd = std::env::current_dir().context("resolving working directory")?;
    let config = PipelineConfig::rooted_at(&cwd);
    let report = pipeline::run(&config)
        .with_context(|| format!("lowercasing the '{}' column", config.column))?;

    info!(
        "{} files, {} rows, {} values changed",
        report.files.len(),
        report.rows(),
        report.changed()
    );
    println!("{CONFIRMATION}");
    Ok(())
}
