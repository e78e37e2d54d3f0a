use crate::warn;
use strum_macros::Display;

/// Session game mode. Immutable for the session; only [`GameMode::Career`]
/// makes the eligibility rule apply its facility gates.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Hash)]
pub enum GameMode {
    Sandbox,
    Career,
    ScienceSandbox,
}

impl From<&str> for GameMode {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "sandbox" => GameMode::Sandbox,
            "career" => GameMode::Career,
            "science_sandbox" | "sciencesandbox" => GameMode::ScienceSandbox,
            other => {
                warn!("Unknown game mode '{other}', assuming sandbox");
                GameMode::Sandbox
            }
        }
    }
}

/// Facility-derived values fetched from the host on demand during a
/// recompute, never cached across ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacilityLevels {
    science_cost_limit: f64,
    eva_unlocked: bool,
}

impl FacilityLevels {
    pub fn new(science_cost_limit: f64, eva_unlocked: bool) -> Self {
        Self { science_cost_limit, eva_unlocked }
    }

    /// Science cost limit derived from the research facility level.
    pub fn science_cost_limit(&self) -> f64 { self.science_cost_limit }

    /// Whether the astronaut facility level unlocks suited-crew activity.
    pub fn eva_unlocked(&self) -> bool { self.eva_unlocked }
}
