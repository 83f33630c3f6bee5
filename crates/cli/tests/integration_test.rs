use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use solbench::config::Config;
use solbench::contract::{Contract, CorpusGenerator};
use solbench::ground_truth::GroundTruth;
use solbench::report::ResultTable;
use solbench::rng::RandomSource;
use solbench::verdict::VulnCategory;
use solbench::AnalysisPipeline;
use solbench_detectors::default_registry;
use tempfile::TempDir;

const TRIALS: usize = 1000;

/// Fraction of trials in which each category was judged safe.
fn safe_rates(name: &str, source: &str, seed: u64) -> [f64; 3] {
    let contract = Contract::from_source(name, PathBuf::from(name), source);
    let registry = default_registry();
    let mut rng = RandomSource::seeded(seed);
    let mut safe = [0usize; 3];
    for _ in 0..TRIALS {
        let verdicts = registry.run_all(&contract, &mut rng);
        for (i, category) in VulnCategory::ALL.into_iter().enumerate() {
            if verdicts.get(category) {
                safe[i] += 1;
            }
        }
    }
    safe.map(|n| n as f64 / TRIALS as f64)
}

fn test_config(root: &Path, min_contracts: usize) -> Config {
    let mut config = Config::default();
    config.corpus.directory = root.join("benchmarks");
    config.corpus.min_contracts = min_contracts;
    config.ground_truth.path = root.join("ground_truth.json");
    config.output.results_dir = root.join("results");
    config
}

#[test]
fn test_vulnerable_contract_mostly_flagged() {
    let source = include_str!("fixtures/vulnerable_bank.sol");
    let rates = safe_rates("vulnerable_bank.sol", source, 11);
    for (category, rate) in VulnCategory::ALL.iter().zip(rates) {
        assert!(rate < 0.4, "{category} judged safe at rate {rate}");
    }
}

#[test]
fn test_safe_contract_mostly_passes() {
    let source = include_str!("fixtures/safe_vault.sol");
    let rates = safe_rates("safe_vault.sol", source, 12);
    for (category, rate) in VulnCategory::ALL.iter().zip(rates) {
        assert!(rate > 0.6, "{category} judged safe at rate {rate}");
    }
}

#[test]
fn test_pipeline_over_generated_corpus() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path(), 8);
    let corpus = config.corpus.directory.clone();
    CorpusGenerator::new(&corpus, "0.8.0").generate(8).unwrap();

    let mut pipeline = AnalysisPipeline::new(config, default_registry(), RandomSource::seeded(5));
    let rows = pipeline.run(&corpus, None).unwrap();

    assert_eq!(rows.len(), 8);
    assert_eq!(pipeline.matrix().total(), 24);

    let truth = GroundTruth::load(&dir.path().join("ground_truth.json")).unwrap();
    assert_eq!(truth.len(), 8);
    assert!(truth.contains("benchmark_1.sol"));

    let metrics = pipeline.compute_metrics(Some(rows.as_slice()));
    let report = metrics.report().expect("metrics computed");
    assert_eq!(report.total_checks, 24);
    assert!((0.0..=1.0).contains(&report.accuracy));
}

#[test]
fn test_seeded_runs_reproducible() {
    let run = |seed: u64| {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path(), 6);
        let corpus = config.corpus.directory.clone();
        CorpusGenerator::new(&corpus, "0.8.0").generate(6).unwrap();
        let mut pipeline =
            AnalysisPipeline::new(config, default_registry(), RandomSource::seeded(seed));
        let rows = pipeline.run(&corpus, None).unwrap();
        let metrics = pipeline.compute_metrics(Some(rows.as_slice()));
        (rows, metrics)
    };

    let (rows_a, metrics_a) = run(77);
    let (rows_b, metrics_b) = run(77);
    assert_eq!(rows_a, rows_b);
    assert_eq!(metrics_a, metrics_b);
}

fn write_config_file(root: &Path) -> PathBuf {
    let path = root.join("solbench.toml");
    let toml = format!(
        r#"
[corpus]
directory = '{}'
min_contracts = 8

[ground_truth]
path = '{}'

[output]
results_dir = '{}'
"#,
        root.join("benchmarks").display(),
        root.join("ground_truth.json").display(),
        root.join("results").display(),
    );
    fs::write(&path, toml).unwrap();
    path
}

#[test]
fn test_cli_run_then_metrics() {
    let dir = TempDir::new().unwrap();
    let config = write_config_file(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_solbench"))
        .current_dir(dir.path())
        .args(["run", "--config"])
        .arg(&config)
        .args(["--seed", "42", "--format", "json", "--no-color"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["contracts_analyzed"], 8);
    assert_eq!(summary["metrics"]["total_checks"], 24);

    let results = dir.path().join("results").join("analysis_results.csv");
    let table = ResultTable::read_csv(&results).unwrap();
    assert_eq!(table.len(), 8);

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("results").join("metrics.json")).unwrap())
            .unwrap();
    assert_eq!(saved, summary["metrics"]);

    let output = Command::new(env!("CARGO_BIN_EXE_solbench"))
        .current_dir(dir.path())
        .args(["metrics", "--results"])
        .arg(&results)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());
    let recomputed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(recomputed, saved);
}

#[test]
fn test_cli_list() {
    let output = Command::new(env!("CARGO_BIN_EXE_solbench"))
        .arg("list")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["integer-overflow", "reentrancy", "access-control"] {
        assert!(stdout.contains(name), "{name} missing from list output");
    }
    assert!(stdout.contains("Total: 3 detectors"));
}
