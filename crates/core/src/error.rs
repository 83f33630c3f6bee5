use std::path::PathBuf;

/// Errors raised by the benchmarking core.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("failed to read contract {path}: {source}")]
    ContractRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("corpus directory not found: {0}")]
    CorpusMissing(PathBuf),

    #[error("failed to enumerate corpus {path}: {source}")]
    CorpusRead {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("ground truth store not found: {0}")]
    GroundTruthMissing(PathBuf),

    #[error("malformed ground truth store {path}: {source}")]
    GroundTruthFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed results table at line {line}: {reason}")]
    ResultsFormat { line: usize, reason: String },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("solc error: {0}")]
    Compiler(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
