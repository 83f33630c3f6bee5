use super::context::AnalysisContext;
use super::traits::Detector;
use crate::complexity::ComplexityScorer;
use crate::contract::Contract;
use crate::rng::RandomSource;
use crate::verdict::{Verdicts, VulnCategory};

/// Holds exactly one detector per category and runs them against contracts.
pub struct DetectorRegistry {
    overflow: Box<dyn Detector>,
    reentrancy: Box<dyn Detector>,
    access_control: Box<dyn Detector>,
    scorer: ComplexityScorer,
}

impl DetectorRegistry {
    pub fn new(
        overflow: Box<dyn Detector>,
        reentrancy: Box<dyn Detector>,
        access_control: Box<dyn Detector>,
    ) -> Self {
        Self {
            overflow,
            reentrancy,
            access_control,
            scorer: ComplexityScorer::new(),
        }
    }

    /// Detector ruling on `category`
    pub fn get(&self, category: VulnCategory) -> &dyn Detector {
        match category {
            VulnCategory::Overflow => self.overflow.as_ref(),
            VulnCategory::Reentrancy => self.reentrancy.as_ref(),
            VulnCategory::AccessControl => self.access_control.as_ref(),
        }
    }

    /// Replace the detector for its category, returning the previous one
    pub fn replace(&mut self, detector: Box<dyn Detector>) -> Box<dyn Detector> {
        let slot = match detector.category() {
            VulnCategory::Overflow => &mut self.overflow,
            VulnCategory::Reentrancy => &mut self.reentrancy,
            VulnCategory::AccessControl => &mut self.access_control,
        };
        std::mem::replace(slot, detector)
    }

    /// Run all three detectors in category order. Complexity is re-scored
    /// before each detector call.
    pub fn run_all(&self, contract: &Contract, rng: &mut RandomSource) -> Verdicts {
        let mut verdicts = Verdicts::default();
        for category in VulnCategory::ALL {
            let complexity = self.scorer.score(contract.source(), rng);
            let mut ctx = AnalysisContext::new(contract, complexity, rng);
            verdicts.set(category, self.get(category).detect(&mut ctx));
        }
        verdicts
    }

    /// Detectors in category order
    pub fn detectors(&self) -> [&dyn Detector; 3] {
        VulnCategory::ALL.map(|c| self.get(c))
    }

    /// List all registered detector names
    pub fn list_detectors(&self) -> Vec<&str> {
        self.detectors().iter().map(|d| d.name()).collect()
    }
}
