use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::types::{GroundTruthEntry, GroundTruthMetadata, LabelThreshold, THRESHOLD_JITTER};
use crate::complexity::ComplexityScorer;
use crate::config::CorpusConfig;
use crate::contract::{discover_contracts, Contract};
use crate::error::{BenchError, Result};
use crate::rng::RandomSource;
use crate::verdict::{Verdicts, VulnCategory};

/// Synthetic reference labels keyed by contract file name.
///
/// Read and written as a whole: persisting replaces any previous store at
/// the target path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroundTruth {
    entries: BTreeMap<String, GroundTruthEntry>,
}

impl GroundTruth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label every contract in `corpus_dir`.
    ///
    /// `rng` is reseeded first so the labels are decorrelated from the
    /// detector draws of the same run. Unreadable contracts are logged and
    /// left without an entry.
    pub fn generate(
        corpus_dir: &Path,
        corpus: &CorpusConfig,
        scorer: &ComplexityScorer,
        rng: &mut RandomSource,
    ) -> Result<Self> {
        let seed = rng.reseed_distinct();
        info!(seed, dir = %corpus_dir.display(), "generating ground truth");

        let date = Local::now().format("%Y-%m-%d").to_string();
        let mut truth = Self::new();

        for path in discover_contracts(corpus_dir, &corpus.extension, &corpus.exclude)? {
            let contract = match Contract::load(&path) {
                Ok(contract) => contract,
                Err(e) => {
                    error!("Error labelling {}: {}", path.display(), e);
                    continue;
                }
            };
            info!("Analyzing {} for ground truth...", contract.file_name);
            let entry = Self::label_contract(&contract, scorer, rng, &date);
            truth.insert(entry);
        }

        Ok(truth)
    }

    /// Draw reference labels for a single contract.
    pub fn label_contract(
        contract: &Contract,
        scorer: &ComplexityScorer,
        rng: &mut RandomSource,
        date: &str,
    ) -> GroundTruthEntry {
        let complexity = scorer.score(contract.source(), rng);

        let thresholds = VulnCategory::ALL.map(|category| {
            LabelThreshold::for_category(category).at(complexity)
                + rng.uniform(-THRESHOLD_JITTER, THRESHOLD_JITTER)
        });

        let mut labels = Verdicts::default();
        for (category, threshold) in VulnCategory::ALL.into_iter().zip(thresholds) {
            labels.set(category, rng.sample() > threshold);
        }

        GroundTruthEntry {
            labels,
            metadata: GroundTruthMetadata {
                filename: contract.file_name.clone(),
                date_analyzed: date.to_string(),
                complexity_score: complexity,
            },
        }
    }

    /// Load a persisted store.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                BenchError::GroundTruthMissing(path.to_path_buf())
            } else {
                BenchError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        serde_json::from_str(&data).map_err(|source| BenchError::GroundTruthFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the full store to `path`, replacing whatever was there.
    pub fn persist(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| BenchError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data).map_err(|source| BenchError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Ground truth saved to {}", path.display());
        Ok(())
    }

    pub fn insert(&mut self, entry: GroundTruthEntry) {
        self.entries.insert(entry.metadata.filename.clone(), entry);
    }

    pub fn get(&self, file_name: &str) -> Option<&GroundTruthEntry> {
        self.entries.get(file_name)
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.entries.contains_key(file_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroundTruthEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
