use crate::host::{SituationSource, Vehicle};
use crate::tracking::{BiomeResolver, Situation};
use std::sync::Arc;

/// The tracked fields captured at the last recompute. Exactly one snapshot
/// is live at a time; it is replaced whole, never partially mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    vehicle_id: usize,
    biome: String,
    situation: Situation,
    body: String,
}

impl StateSnapshot {
    pub fn vehicle_id(&self) -> usize { self.vehicle_id }

    pub fn biome(&self) -> &str { &self.biome }

    pub fn situation(&self) -> Situation { self.situation }

    pub fn body(&self) -> &str { &self.body }
}

/// Compares a remembered snapshot against a fresh read of the vehicle to
/// decide whether a recompute is due.
pub struct StateTracker {
    biomes: BiomeResolver,
    situations: Arc<dyn SituationSource>,
}

impl StateTracker {
    pub fn new(biomes: BiomeResolver, situations: Arc<dyn SituationSource>) -> Self {
        Self { biomes, situations }
    }

    /// Captures the tracked fields of `vehicle` as a fresh snapshot.
    pub fn snapshot(&self, vehicle: &Vehicle) -> StateSnapshot {
        StateSnapshot {
            vehicle_id: vehicle.id(),
            biome: self.biomes.resolve(Some(vehicle)),
            situation: self.situations.situation_of(vehicle),
            body: String::from(vehicle.body().name()),
        }
    }

    /// True iff the vehicle is loaded and any tracked field moved since
    /// `previous`. A missing previous snapshot counts as changed. Cheap on
    /// purpose: re-resolves biome and situation but never enumerates the
    /// instrument list.
    pub fn has_changed(&self, previous: Option<&StateSnapshot>, vehicle: &Vehicle) -> bool {
        if !vehicle.loaded() {
            return false;
        }
        let Some(prev) = previous else {
            return true;
        };
        prev.vehicle_id != vehicle.id()
            || prev.biome != self.biomes.resolve(Some(vehicle))
            || prev.situation != self.situations.situation_of(vehicle)
            || prev.body != vehicle.body().name()
    }
}
