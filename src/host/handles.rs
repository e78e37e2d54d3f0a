use crate::host::capabilities::{BiomeMap, FacilityQuery, SituationSource, VehicleSource};
use std::sync::Arc;

/// Bundle of the injected host capabilities, providing access to vehicle
/// enumeration, biome lookup, situation derivation and facility queries.
#[derive(Clone)]
pub struct HostHandles {
    /// Source of the active vehicle and its instrument modules.
    vehicles: Arc<dyn VehicleSource>,
    /// Biome polygon lookup for the bodies' surfaces.
    biomes: Arc<dyn BiomeMap>,
    /// Derivation of the coarse flight/surface situation.
    situations: Arc<dyn SituationSource>,
    /// Facility-derived science cost limit and EVA unlock.
    facilities: Arc<dyn FacilityQuery>,
}

impl HostHandles {
    /// Creates a new instance of `HostHandles` from the four host capabilities.
    pub fn new(
        vehicles: Arc<dyn VehicleSource>,
        biomes: Arc<dyn BiomeMap>,
        situations: Arc<dyn SituationSource>,
        facilities: Arc<dyn FacilityQuery>,
    ) -> Self {
        Self { vehicles, biomes, situations, facilities }
    }

    /// Provides a cloned reference to the vehicle source.
    pub fn vehicles(&self) -> Arc<dyn VehicleSource> { Arc::clone(&self.vehicles) }

    /// Provides a cloned reference to the biome map.
    pub fn biomes(&self) -> Arc<dyn BiomeMap> { Arc::clone(&self.biomes) }

    /// Provides a cloned reference to the situation source.
    pub fn situations(&self) -> Arc<dyn SituationSource> { Arc::clone(&self.situations) }

    /// Provides a cloned reference to the facility query.
    pub fn facilities(&self) -> Arc<dyn FacilityQuery> { Arc::clone(&self.facilities) }
}
