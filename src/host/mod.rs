mod capabilities;
mod game;
mod handles;
mod instrument;
mod vehicle;

pub use capabilities::{BiomeMap, FacilityQuery, SituationSource, VehicleSource};
pub use game::{FacilityLevels, GameMode};
pub use handles::HostHandles;
pub use instrument::{AvailabilityFn, InstrumentModule};
pub use vehicle::{CelestialBody, Vehicle};

#[cfg(test)]
mod tests;
