use crate::detector::heuristic::count_occurrences;
use crate::rng::RandomSource;

/// Syntactic markers and their base weights. Positive markers make a
/// contract look more intricate, guard markers make it look simpler.
pub const COMPLEXITY_MARKERS: &[(&str, f64)] = &[
    ("mapping", 0.5),
    ("struct", 0.3),
    ("assembly", 1.0),
    ("delegatecall", 1.0),
    ("selfdestruct", 0.8),
    ("require", -0.2),
    ("assert", -0.2),
    ("modifier", -0.3),
];

/// Size contribution: one unit per this many characters.
const CHARS_PER_UNIT: f64 = 1000.0;
const BASE_JITTER: f64 = 0.1;
const WEIGHT_JITTER: (f64, f64) = (0.9, 1.1);
const NORMALIZER: f64 = 10.0;

/// Derives a bounded complexity proxy in `[0, 1]` from contract source.
///
/// Not memoized: every call re-samples its perturbations from `rng`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexityScorer;

impl ComplexityScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, text: &str, rng: &mut RandomSource) -> f64 {
        let mut complexity = text.chars().count() as f64 / CHARS_PER_UNIT;
        complexity += rng.uniform(-BASE_JITTER, BASE_JITTER);

        for (marker, weight) in COMPLEXITY_MARKERS {
            let adjusted = weight * rng.uniform(WEIGHT_JITTER.0, WEIGHT_JITTER.1);
            complexity += count_occurrences(text, marker) as f64 * adjusted;
        }

        (complexity / NORMALIZER).clamp(0.0, 1.0)
    }
}
