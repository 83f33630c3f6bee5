use crate::contract::Contract;
use crate::rng::RandomSource;

/// Provides a detector with the contract under analysis, its freshly sampled
/// complexity score, and the run's random source.
pub struct AnalysisContext<'a> {
    pub contract: &'a Contract,
    pub complexity: f64,
    rng: &'a mut RandomSource,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(contract: &'a Contract, complexity: f64, rng: &'a mut RandomSource) -> Self {
        Self {
            contract,
            complexity,
            rng,
        }
    }

    /// Lower-cased contract source
    pub fn source(&self) -> &str {
        self.contract.source()
    }

    pub fn rng(&mut self) -> &mut RandomSource {
        &mut *self.rng
    }
}
