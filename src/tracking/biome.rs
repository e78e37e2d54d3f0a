use crate::host::{BiomeMap, Vehicle};
use std::sync::Arc;

/// Resolves the operator-facing location label for a vehicle's position.
pub struct BiomeResolver {
    map: Arc<dyn BiomeMap>,
}

impl BiomeResolver {
    pub fn new(map: Arc<dyn BiomeMap>) -> Self { Self { map } }

    /// Location label for the vehicle, empty when there is nothing to
    /// resolve: no vehicle, vehicle not loaded, or a body without a biome
    /// map. A named landing site takes precedence over the biome polygon.
    pub fn resolve(&self, vehicle: Option<&Vehicle>) -> String {
        let Some(vehicle) = vehicle else {
            return String::new();
        };
        if !vehicle.loaded() || !vehicle.body().has_biome_map() {
            return String::new();
        }
        match vehicle.landed_at() {
            Some(label) if !label.is_empty() => String::from(label),
            _ => self.map.biome_at(vehicle.body().name(), vehicle.lat(), vehicle.lon()),
        }
    }
}
