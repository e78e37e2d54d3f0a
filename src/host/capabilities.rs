use crate::host::game::FacilityLevels;
use crate::host::instrument::InstrumentModule;
use crate::host::vehicle::Vehicle;
use crate::tracking::Situation;
use fixed::types::I32F32;
use std::sync::Arc;

/// Biome polygon lookup on a celestial body's surface.
pub trait BiomeMap: Send + Sync {
    /// Label of the biome polygon containing the coordinate on the named body.
    fn biome_at(&self, body_name: &str, lat: I32F32, lon: I32F32) -> String;
}

/// Derives the coarse flight/surface situation of a vehicle.
pub trait SituationSource: Send + Sync {
    fn situation_of(&self, vehicle: &Vehicle) -> Situation;
}

/// Read access to the facility-derived limits, queried per recompute.
pub trait FacilityQuery: Send + Sync {
    fn levels(&self) -> FacilityLevels;
}

/// Read access to the host's active vehicle and its instrument modules.
pub trait VehicleSource: Send + Sync {
    /// The currently active vehicle, if any.
    fn active_vehicle(&self) -> Option<Vehicle>;

    /// Instrument modules attached to the vehicle, in the vehicle-defined
    /// enumeration order the classifier must preserve.
    fn instruments_of(&self, vehicle_id: usize) -> Vec<Arc<InstrumentModule>>;
}
