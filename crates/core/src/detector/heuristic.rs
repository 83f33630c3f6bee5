use super::context::AnalysisContext;
use crate::rng::RandomSource;

const PATTERN_JITTER: (f64, f64) = (0.9, 1.1);
const BASE_JITTER: (f64, f64) = (0.9, 1.1);

/// Parameters of a lexical pattern-count heuristic.
///
/// The verdict is randomized: the probability of a "safe" call starts at
/// `safe_base` when safety patterns outweigh risk patterns (else
/// `unsafe_base`), is jittered, then discounted by
/// `1 - complexity / complexity_divisor`.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicProfile {
    pub risk_patterns: &'static [&'static str],
    pub safety_patterns: &'static [&'static str],
    pub safe_base: f64,
    pub unsafe_base: f64,
    pub complexity_divisor: f64,
}

impl HeuristicProfile {
    /// Base probability of a safe call before jitter and discount.
    /// Ties go to the risky side.
    pub fn base_probability(&self, safety_score: f64, risk_score: f64) -> f64 {
        if safety_score > risk_score {
            self.safe_base
        } else {
            self.unsafe_base
        }
    }

    /// Apply the complexity discount to a (jittered) base probability.
    pub fn discount(&self, base: f64, complexity: f64) -> f64 {
        base * (1.0 - complexity / self.complexity_divisor)
    }

    /// Probability that `text` is judged safe, with all jitters drawn from `rng`.
    pub fn safe_probability(&self, text: &str, complexity: f64, rng: &mut RandomSource) -> f64 {
        let risk_score = weighted_score(text, self.risk_patterns, rng);
        let safety_score = weighted_score(text, self.safety_patterns, rng);

        let base = self.base_probability(safety_score, risk_score)
            * rng.uniform(BASE_JITTER.0, BASE_JITTER.1);

        self.discount(base, complexity)
    }

    /// Draw the verdict for the contract in `ctx`.
    pub fn evaluate(&self, ctx: &mut AnalysisContext<'_>) -> bool {
        let contract = ctx.contract;
        let complexity = ctx.complexity;
        let probability = self.safe_probability(contract.source(), complexity, ctx.rng());
        ctx.rng().sample() < probability
    }
}

/// Non-overlapping occurrence count of `pattern` in `text`.
pub fn count_occurrences(text: &str, pattern: &str) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    text.matches(pattern).count()
}

/// Sum of pattern counts, each pattern's count scaled by its own jitter draw.
pub fn weighted_score(text: &str, patterns: &[&str], rng: &mut RandomSource) -> f64 {
    patterns
        .iter()
        .map(|p| count_occurrences(text, p) as f64 * rng.uniform(PATTERN_JITTER.0, PATTERN_JITTER.1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Contract;
    use std::path::PathBuf;

    const PROFILE: HeuristicProfile = HeuristicProfile {
        risk_patterns: &["+=", "unchecked {"],
        safety_patterns: &["require("],
        safe_base: 0.7,
        unsafe_base: 0.3,
        complexity_divisor: 1.0,
    };

    #[test]
    fn test_count_occurrences_non_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("x += 1; y += 2;", "+="), 2);
        assert_eq!(count_occurrences("nothing here", "require("), 0);
        assert_eq!(count_occurrences("abc", ""), 0);
    }

    #[test]
    fn test_weighted_score_within_jitter() {
        let mut rng = RandomSource::seeded(42);
        let text = "+= += += unchecked {";
        for _ in 0..50 {
            let score = weighted_score(text, PROFILE.risk_patterns, &mut rng);
            // 3 * [0.9, 1.1] + 1 * [0.9, 1.1]
            assert!((3.6..=4.4).contains(&score), "score {score}");
        }
        assert_eq!(weighted_score("", PROFILE.risk_patterns, &mut rng), 0.0);
    }

    #[test]
    fn test_base_probability_strict_comparison() {
        assert_eq!(PROFILE.base_probability(2.0, 1.0), 0.7);
        assert_eq!(PROFILE.base_probability(1.0, 2.0), 0.3);
        assert_eq!(PROFILE.base_probability(0.0, 0.0), 0.3);
    }

    #[test]
    fn test_discount() {
        assert!((PROFILE.discount(0.7, 0.0) - 0.7).abs() < 1e-12);
        assert!(PROFILE.discount(0.7, 1.0).abs() < 1e-12);
        let halved = HeuristicProfile {
            complexity_divisor: 2.0,
            ..PROFILE
        };
        assert!((halved.discount(0.8, 1.0) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_safe_probability_ranges() {
        let mut rng = RandomSource::seeded(8);
        let guarded = "require( require( require(";
        let risky = "+= += unchecked {";
        for _ in 0..50 {
            let p = PROFILE.safe_probability(guarded, 0.0, &mut rng);
            assert!((0.63..=0.77).contains(&p), "guarded {p}");
            let p = PROFILE.safe_probability(risky, 0.0, &mut rng);
            assert!((0.27..=0.33).contains(&p), "risky {p}");
        }
    }

    #[test]
    fn test_full_complexity_never_safe() {
        let contract = Contract::from_source("c.sol", PathBuf::from("c.sol"), "require( require(");
        let mut rng = RandomSource::seeded(1);
        for _ in 0..200 {
            let mut ctx = AnalysisContext::new(&contract, 1.0, &mut rng);
            assert!(!PROFILE.evaluate(&mut ctx));
        }
    }

    #[test]
    fn test_evaluate_reproducible_with_seed() {
        let contract = Contract::from_source("c.sol", PathBuf::from("c.sol"), "x += 1;");
        let run = |seed| {
            let mut rng = RandomSource::seeded(seed);
            (0..32)
                .map(|_| {
                    let mut ctx = AnalysisContext::new(&contract, 0.2, &mut rng);
                    PROFILE.evaluate(&mut ctx)
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(77), run(77));
    }
}
