use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BenchError, Result};
use crate::rng::SeedPolicy;

/// Default location of the project config file.
pub const CONFIG_FILE: &str = ".solbench.toml";

/// Project-level configuration loaded from `.solbench.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub global: GlobalConfig,
    pub corpus: CorpusConfig,
    pub ground_truth: GroundTruthConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub seed_mode: String,
    pub seed: u64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            seed_mode: "clock".to_string(),
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub directory: PathBuf,
    pub extension: String,
    pub min_contracts: usize,
    pub solc_version: String,
    /// Glob patterns of contract files to skip
    pub exclude: Vec<String>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("benchmarks"),
            extension: "sol".to_string(),
            min_contracts: 100,
            solc_version: "0.8.0".to_string(),
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GroundTruthConfig {
    pub path: PathBuf,
}

impl Default for GroundTruthConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("ground_truth.json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub results_dir: PathBuf,
    pub results_file: String,
    pub metrics_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("results"),
            results_file: "analysis_results.csv".to_string(),
            metrics_file: "metrics.json".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file path. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| BenchError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| BenchError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the configured seed mode. Unknown modes fall back to the clock.
    pub fn seed_policy(&self) -> SeedPolicy {
        parse_seed_mode(&self.global.seed_mode, self.global.seed).unwrap_or(SeedPolicy::Clock)
    }

    pub fn results_path(&self) -> PathBuf {
        self.output.results_dir.join(&self.output.results_file)
    }

    pub fn metrics_path(&self) -> PathBuf {
        self.output.results_dir.join(&self.output.metrics_file)
    }

    /// Generate default config file content.
    pub fn default_toml() -> &'static str {
        r#"# solbench configuration

[global]
# Random seed source: "clock" (varies every run), "daily" (stable per day), "fixed"
seed_mode = "clock"
# Used when seed_mode = "fixed"
seed = 0

[corpus]
directory = "benchmarks"
extension = "sol"
# Synthetic contracts are generated when fewer than this many exist
min_contracts = 100
solc_version = "0.8.0"
# Glob patterns for contract files to skip
exclude = []

[ground_truth]
# Freshly generated labels are written here (overwritten each run)
path = "ground_truth.json"

[output]
results_dir = "results"
results_file = "analysis_results.csv"
metrics_file = "metrics.json"
"#
    }
}

fn parse_seed_mode(mode: &str, seed: u64) -> Option<SeedPolicy> {
    match mode.to_lowercase().as_str() {
        "clock" | "variable" => Some(SeedPolicy::Clock),
        "daily" => Some(SeedPolicy::Daily),
        "fixed" => Some(SeedPolicy::Fixed(seed)),
        _ => None,
    }
}
