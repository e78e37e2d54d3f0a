use crate::classify::EligibilityRule;
use crate::host::{CelestialBody, FacilityLevels, GameMode, InstrumentModule};
use crate::tracking::Situation;
use crate::warn;
use std::sync::Arc;

/// Ordered partition of one classification run. `complete` holds the
/// instruments that already produced a result, `available` those passing
/// the eligibility rule; the two never share an instrument, and an
/// instrument failing both checks appears in neither.
#[derive(Debug, Clone, Default)]
pub struct ClassificationResult {
    complete: Vec<Arc<InstrumentModule>>,
    available: Vec<Arc<InstrumentModule>>,
}

impl ClassificationResult {
    pub fn empty() -> Self { Self::default() }

    pub fn complete(&self) -> &[Arc<InstrumentModule>] { &self.complete }

    pub fn available(&self) -> &[Arc<InstrumentModule>] { &self.available }
}

/// Partitions the full instrument set for the current context.
pub struct ExperimentClassifier {
    rule: EligibilityRule,
}

impl ExperimentClassifier {
    pub fn new(rule: EligibilityRule) -> Self { Self { rule } }

    /// Single pass over `instruments` in enumeration order, so both output
    /// lists render in the vehicle-defined order. An instrument that
    /// already holds data lands in `complete` without an eligibility
    /// check; malformed entries are skipped.
    pub fn classify(
        &self,
        instruments: &[Arc<InstrumentModule>],
        situation: Situation,
        body: &CelestialBody,
        mode: GameMode,
        levels: &FacilityLevels,
    ) -> ClassificationResult {
        let mut result = ClassificationResult::empty();
        for instrument in instruments {
            if instrument.is_malformed() {
                warn!(
                    "Skipping malformed instrument module {} ('{}')",
                    instrument.id(),
                    instrument.action_name()
                );
                continue;
            }
            if instrument.has_data() {
                result.complete.push(Arc::clone(instrument));
            } else if self.rule.is_eligible(instrument, situation, body, mode, levels) {
                result.available.push(Arc::clone(instrument));
            }
        }
        result
    }
}
