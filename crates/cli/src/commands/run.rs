use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::info;

use solbench::config::Config;
use solbench::contract::{count_contracts, CorpusGenerator};
use solbench::report::ResultTable;
use solbench::AnalysisPipeline;

use crate::output::{self, RunSummary};
use crate::OutputFormat;

pub struct RunArgs {
    pub corpus: Option<PathBuf>,
    pub ground_truth: Option<PathBuf>,
    pub results_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub daily_seed: bool,
    pub format: OutputFormat,
    pub quiet: bool,
    pub no_color: bool,
}

pub fn run(args: RunArgs) -> Result<()> {
    let mut config = super::load_config(args.config)?;
    apply_overrides(&mut config, &args.corpus, &args.results_dir, args.seed, args.daily_seed);

    // An explicit store is both the comparison source and the metrics source.
    if let Some(path) = &args.ground_truth {
        config.ground_truth.path = path.clone();
    }

    let corpus_dir = config.corpus.directory.clone();
    ensure_corpus(&config, &corpus_dir)?;

    let results_path = config.results_path();
    let metrics_path = config.metrics_path();

    let mut pipeline = AnalysisPipeline::from_config(config, solbench_detectors::default_registry());
    info!(seed = pipeline.rng().seed(), "starting benchmark run");

    let rows = pipeline
        .run(&corpus_dir, args.ground_truth.as_deref())
        .with_context(|| format!("benchmark run over {} failed", corpus_dir.display()))?;
    let metrics = pipeline.compute_metrics(Some(rows.as_slice()));

    let table = ResultTable::new(rows);
    table
        .write_csv(&results_path)
        .with_context(|| format!("failed to write {}", results_path.display()))?;
    write_metrics(&metrics_path, &metrics)?;
    info!("Results saved to {}", results_path.display());

    let summary = RunSummary {
        contracts_analyzed: table.len(),
        flagged: table.flag_counts(),
        metrics,
    };

    match args.format {
        OutputFormat::Json => output::json::print(&summary)?,
        OutputFormat::Text => output::text::print(&summary, args.quiet, args.no_color)?,
    }

    if summary.metrics.error().is_some() {
        std::process::exit(1);
    }

    Ok(())
}

fn apply_overrides(
    config: &mut Config,
    corpus: &Option<PathBuf>,
    results_dir: &Option<PathBuf>,
    seed: Option<u64>,
    daily_seed: bool,
) {
    if let Some(dir) = corpus {
        config.corpus.directory = dir.clone();
    }
    if let Some(dir) = results_dir {
        config.output.results_dir = dir.clone();
    }
    if let Some(seed) = seed {
        config.global.seed_mode = "fixed".to_string();
        config.global.seed = seed;
    } else if daily_seed {
        config.global.seed_mode = "daily".to_string();
    }
}

/// Top the corpus up with synthetic contracts when it is below `min_contracts`.
fn ensure_corpus(config: &Config, dir: &Path) -> Result<()> {
    let existing = count_contracts(dir, &config.corpus.extension);
    let required = config.corpus.min_contracts;
    if existing >= required {
        return Ok(());
    }

    info!(existing, required, "corpus too small, generating contracts");
    let generator = CorpusGenerator::new(dir, config.corpus.solc_version.clone());
    generator
        .generate(required)
        .with_context(|| format!("failed to generate corpus in {}", dir.display()))?;

    let available = count_contracts(dir, &config.corpus.extension);
    if available < required {
        bail!(
            "corpus {} holds {} contracts after generation, {} required",
            dir.display(),
            available,
            required
        );
    }
    Ok(())
}

fn write_metrics(path: &Path, metrics: &solbench::metrics::MetricsRecord) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(metrics)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    info!("Metrics saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use solbench::rng::SeedPolicy;

    #[test]
    fn test_seed_override() {
        let mut config = Config::default();
        apply_overrides(&mut config, &None, &None, Some(9), false);
        assert_eq!(config.seed_policy(), SeedPolicy::Fixed(9));

        let mut config = Config::default();
        apply_overrides(&mut config, &None, &None, None, true);
        assert_eq!(config.seed_policy(), SeedPolicy::Daily);
    }

    #[test]
    fn test_path_overrides() {
        let mut config = Config::default();
        apply_overrides(
            &mut config,
            &Some(PathBuf::from("contracts")),
            &Some(PathBuf::from("out")),
            None,
            false,
        );
        assert_eq!(config.corpus.directory, PathBuf::from("contracts"));
        assert_eq!(config.metrics_path(), PathBuf::from("out").join("metrics.json"));
    }
}
