use serde::Serialize;

use super::confusion::ConfusionMatrix;

/// Rates and raw counts reduced from a confusion matrix snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub precision: f64,
    pub recall: f64,
    pub f_measure: f64,
    pub accuracy: f64,
    pub total_checks: u64,
    pub true_positives: u64,
    pub false_positives: u64,
    pub true_negatives: u64,
    pub false_negatives: u64,
}

impl MetricsReport {
    pub fn from_matrix(matrix: &ConfusionMatrix) -> Self {
        let tp = matrix.true_positives();
        let fp = matrix.false_positives();
        let tn = matrix.true_negatives();
        let fn_ = matrix.false_negatives();
        let total = matrix.total();

        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, tp + fn_);
        let f_measure = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        let accuracy = ratio(tp + tn, total);

        Self {
            precision,
            recall,
            f_measure,
            accuracy,
            total_checks: total,
            true_positives: tp,
            false_positives: fp,
            true_negatives: tn,
            false_negatives: fn_,
        }
    }
}

/// Zeroed rates plus the reason metrics could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsFailure {
    pub precision: f64,
    pub recall: f64,
    pub f_measure: f64,
    pub accuracy: f64,
    pub error: String,
}

impl MetricsFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            precision: 0.0,
            recall: 0.0,
            f_measure: 0.0,
            accuracy: 0.0,
            error: error.into(),
        }
    }
}

/// Flat metrics record as persisted to `metrics.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricsRecord {
    Computed(MetricsReport),
    Failed(MetricsFailure),
}

impl MetricsRecord {
    pub fn precision(&self) -> f64 {
        match self {
            MetricsRecord::Computed(r) => r.precision,
            MetricsRecord::Failed(f) => f.precision,
        }
    }

    pub fn recall(&self) -> f64 {
        match self {
            MetricsRecord::Computed(r) => r.recall,
            MetricsRecord::Failed(f) => f.recall,
        }
    }

    pub fn f_measure(&self) -> f64 {
        match self {
            MetricsRecord::Computed(r) => r.f_measure,
            MetricsRecord::Failed(f) => f.f_measure,
        }
    }

    pub fn accuracy(&self) -> f64 {
        match self {
            MetricsRecord::Computed(r) => r.accuracy,
            MetricsRecord::Failed(f) => f.accuracy,
        }
    }

    pub fn report(&self) -> Option<&MetricsReport> {
        match self {
            MetricsRecord::Computed(r) => Some(r),
            MetricsRecord::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MetricsRecord::Computed(_) => None,
            MetricsRecord::Failed(f) => Some(&f.error),
        }
    }
}

/// Reduce a matrix to precision, recall, F-measure and accuracy.
pub fn compute(matrix: &ConfusionMatrix) -> MetricsReport {
    MetricsReport::from_matrix(matrix)
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
