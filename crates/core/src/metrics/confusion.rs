use serde::{Deserialize, Serialize};

/// Agreement counters between predicted and reference "safe" labels.
///
/// A vulnerability is the positive class: flagging a truly vulnerable
/// contract is a true positive, calling a vulnerable contract safe is a
/// false negative. Counts are pooled across every category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    true_positives: u64,
    false_positives: u64,
    true_negatives: u64,
    false_negatives: u64,
}

impl ConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_counts(tp: u64, fp: u64, tn: u64, fn_: u64) -> Self {
        Self {
            true_positives: tp,
            false_positives: fp,
            true_negatives: tn,
            false_negatives: fn_,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record one (prediction, reference) comparison.
    pub fn update(&mut self, predicted_safe: bool, actual_safe: bool) {
        match (predicted_safe, actual_safe) {
            (true, true) => self.true_negatives += 1,
            (true, false) => self.false_negatives += 1,
            (false, true) => self.false_positives += 1,
            (false, false) => self.true_positives += 1,
        }
    }

    pub fn true_positives(&self) -> u64 {
        self.true_positives
    }

    pub fn false_positives(&self) -> u64 {
        self.false_positives
    }

    pub fn true_negatives(&self) -> u64 {
        self.true_negatives
    }

    pub fn false_negatives(&self) -> u64 {
        self.false_negatives
    }

    pub fn total(&self) -> u64 {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }
}
