use fixed::types::I32F32;

/// An opaque celestial body identity. Equality is by name; the core never
/// interprets the name beyond comparison and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CelestialBody {
    name: String,
    has_biome_map: bool,
}

impl CelestialBody {
    pub fn new(name: &str, has_biome_map: bool) -> Self {
        Self { name: String::from(name), has_biome_map }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn has_biome_map(&self) -> bool { self.has_biome_map }
}

/// Per-tick view of the host's active vehicle. The host owns the vehicle;
/// this value is a transient copy of its tracked fields.
#[derive(Debug, Clone)]
pub struct Vehicle {
    id: usize,
    lat: I32F32,
    lon: I32F32,
    landed_at: Option<String>,
    body: CelestialBody,
    loaded: bool,
}

impl Vehicle {
    pub fn new(
        id: usize,
        lat: I32F32,
        lon: I32F32,
        landed_at: Option<String>,
        body: CelestialBody,
        loaded: bool,
    ) -> Self {
        Self { id, lat, lon, landed_at, body, loaded }
    }

    pub fn id(&self) -> usize { self.id }

    pub fn lat(&self) -> I32F32 { self.lat }

    pub fn lon(&self) -> I32F32 { self.lon }

    /// Named-site override label, e.g. a pad or runway the vehicle sits on.
    pub fn landed_at(&self) -> Option<&str> { self.landed_at.as_deref() }

    pub fn body(&self) -> &CelestialBody { &self.body }

    /// Whether physics is currently simulating this vehicle.
    pub fn loaded(&self) -> bool { self.loaded }
}
