use crate::host::{CelestialBody, FacilityLevels, GameMode, InstrumentModule};
use crate::tracking::Situation;

/// Pure predicate deciding whether one instrument may currently be
/// activated. Deterministic and side-effect free: repeated calls with
/// identical inputs yield identical output.
pub struct EligibilityRule {
    home_body: String,
}

impl EligibilityRule {
    /// Instrument kind gated by the high-cost policy in career mode.
    pub const SURFACE_SAMPLE_KIND: &'static str = "surfaceSample";
    /// Minimum science cost limit before surface samples unlock at all.
    pub const MIN_SAMPLE_COST_LIMIT: f64 = 500.0;

    pub fn new(home_body: &str) -> Self { Self { home_body: String::from(home_body) } }

    /// Base condition: operable, not yet deployed, and available in the
    /// current situation on the current body. In career mode the
    /// surface-sample kind is additionally gated by the facility policy;
    /// all other modes use the base condition alone.
    pub fn is_eligible(
        &self,
        instrument: &InstrumentModule,
        situation: Situation,
        body: &CelestialBody,
        mode: GameMode,
        levels: &FacilityLevels,
    ) -> bool {
        let base = !instrument.inoperable()
            && !instrument.deployed()
            && instrument.is_available_while(situation, body).unwrap_or(false);

        if mode == GameMode::Career && instrument.kind() == Some(Self::SURFACE_SAMPLE_KIND) {
            return base && self.surface_sample_cleared(body, levels);
        }
        base
    }

    /// Facility gate for the high-cost surface sample: the research
    /// facility must be past the cost limit, and off the home body a
    /// suited crew must be unlocked on top.
    fn surface_sample_cleared(&self, body: &CelestialBody, levels: &FacilityLevels) -> bool {
        if levels.science_cost_limit() >= Self::MIN_SAMPLE_COST_LIMIT {
            if body.name() == self.home_body {
                return true;
            }
            return levels.eva_unlocked();
        }
        false
    }
}
