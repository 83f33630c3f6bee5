use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::complexity::ComplexityScorer;
use crate::config::Config;
use crate::contract::{discover_contracts, Contract};
use crate::detector::DetectorRegistry;
use crate::error::{BenchError, Result};
use crate::ground_truth::GroundTruth;
use crate::metrics::{compute, ConfusionMatrix, MetricsFailure, MetricsRecord};
use crate::report::ResultRow;
use crate::rng::RandomSource;
use crate::verdict::{Verdicts, VulnCategory};

/// Drives one evaluation: ground truth, detection, comparison, metrics.
///
/// Owns the run's random source and confusion matrix; everything executes
/// sequentially on the caller's thread.
pub struct AnalysisPipeline {
    config: Config,
    registry: DetectorRegistry,
    scorer: ComplexityScorer,
    rng: RandomSource,
    matrix: ConfusionMatrix,
}

impl AnalysisPipeline {
    pub fn new(config: Config, registry: DetectorRegistry, rng: RandomSource) -> Self {
        Self {
            config,
            registry,
            scorer: ComplexityScorer::new(),
            rng,
            matrix: ConfusionMatrix::new(),
        }
    }

    /// Pipeline seeded according to `config`.
    pub fn from_config(config: Config, registry: DetectorRegistry) -> Self {
        let rng = RandomSource::new(config.seed_policy());
        Self::new(config, registry, rng)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &DetectorRegistry {
        &self.registry
    }

    pub fn matrix(&self) -> &ConfusionMatrix {
        &self.matrix
    }

    pub fn matrix_mut(&mut self) -> &mut ConfusionMatrix {
        &mut self.matrix
    }

    pub fn rng(&self) -> &RandomSource {
        &self.rng
    }

    /// Run the three detectors on an already loaded contract.
    pub fn analyze_contract(&mut self, contract: &Contract) -> Verdicts {
        self.registry.run_all(contract, &mut self.rng)
    }

    /// Load and analyze a single contract file.
    pub fn check_contract(&mut self, path: &Path) -> Result<Verdicts> {
        let contract = Contract::load(path)?;
        Ok(self.analyze_contract(&contract))
    }

    /// Label `corpus_dir` afresh and persist the labels to the configured path.
    pub fn generate_ground_truth(&mut self, corpus_dir: &Path) -> Result<GroundTruth> {
        let truth =
            GroundTruth::generate(corpus_dir, &self.config.corpus, &self.scorer, &mut self.rng)?;
        truth.persist(&self.config.ground_truth.path)?;
        Ok(truth)
    }

    /// Analyze every contract in `corpus_dir` against ground truth.
    ///
    /// With no `ground_truth_source`, labels are generated and persisted
    /// first; otherwise they are loaded from it. Contracts that fail to load
    /// are logged and skipped. Contracts without a ground-truth entry are
    /// still reported but not compared.
    pub fn run(
        &mut self,
        corpus_dir: &Path,
        ground_truth_source: Option<&Path>,
    ) -> Result<Vec<ResultRow>> {
        let truth = match ground_truth_source {
            Some(path) => GroundTruth::load(path)?,
            None => self.generate_ground_truth(corpus_dir)?,
        };

        let corpus = &self.config.corpus;
        let files = discover_contracts(corpus_dir, &corpus.extension, &corpus.exclude)?;
        info!(
            contracts = files.len(),
            labelled = truth.len(),
            "analyzing corpus {}",
            corpus_dir.display()
        );

        let mut results = Vec::with_capacity(files.len());
        for path in &files {
            let contract = match Contract::load(path) {
                Ok(contract) => contract,
                Err(e) => {
                    error!("Error analyzing {}: {}", path.display(), e);
                    continue;
                }
            };

            let verdicts = self.analyze_contract(&contract);
            match truth.get(&contract.file_name) {
                Some(entry) => self.record(&verdicts, &entry.labels),
                None => debug!("no ground truth for {}", contract.file_name),
            }

            results.push(ResultRow::new(contract.file_name, verdicts));
        }

        info!(
            analyzed = results.len(),
            comparisons = self.matrix.total(),
            "analysis finished"
        );
        Ok(results)
    }

    /// Reduce comparisons to metrics.
    ///
    /// Given a result set, the matrix is rebuilt from scratch against the
    /// persisted ground truth. If that store is missing, the counters held
    /// so far are used instead. Failures never propagate; they come back as
    /// [`MetricsRecord::Failed`].
    pub fn compute_metrics(&mut self, results: Option<&[ResultRow]>) -> MetricsRecord {
        match self.try_compute_metrics(results) {
            Ok(record) => record,
            Err(e) => {
                error!("Error computing metrics: {}", e);
                MetricsRecord::Failed(MetricsFailure::new(e.to_string()))
            }
        }
    }

    fn try_compute_metrics(&mut self, results: Option<&[ResultRow]>) -> Result<MetricsRecord> {
        if let Some(rows) = results {
            let path = self.config.ground_truth.path.clone();
            match GroundTruth::load(&path) {
                Ok(truth) => self.replay(rows, &truth),
                Err(BenchError::GroundTruthMissing(_)) => {
                    warn!(
                        "No ground truth file found at {}. Metrics may be inaccurate.",
                        path.display()
                    );
                }
                Err(e) => return Err(e),
            }
        }
        Ok(MetricsRecord::Computed(compute(&self.matrix)))
    }

    /// Reset the matrix and re-accumulate it from a result set.
    pub fn replay(&mut self, rows: &[ResultRow], truth: &GroundTruth) {
        self.matrix.reset();
        for row in rows {
            if let Some(entry) = truth.get(&row.contract) {
                self.record(&row.verdicts, &entry.labels);
            }
        }
    }

    fn record(&mut self, predicted: &Verdicts, actual: &Verdicts) {
        for category in VulnCategory::ALL {
            self.matrix
                .update(predicted.get(category), actual.get(category));
        }
    }
}
