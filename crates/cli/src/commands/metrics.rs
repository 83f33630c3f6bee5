use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use solbench::report::ResultTable;
use solbench::AnalysisPipeline;

use crate::output;

pub fn run(results: &Path, ground_truth: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let mut config = super::load_config(config)?;
    if let Some(path) = ground_truth {
        config.ground_truth.path = path;
    }

    let table = ResultTable::read_csv(results)
        .with_context(|| format!("failed to read results {}", results.display()))?;

    let mut pipeline = AnalysisPipeline::from_config(config, solbench_detectors::default_registry());
    let metrics = pipeline.compute_metrics(Some(table.rows.as_slice()));

    output::json::print(&metrics)?;
    if metrics.error().is_some() {
        std::process::exit(1);
    }
    Ok(())
}
