use crate::warn;
use strum_macros::{Display, EnumIter};

/// Coarse flight/surface state of a vehicle, derived each tick by the host.
/// The core only ever compares situations for equality.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Hash, EnumIter)]
pub enum Situation {
    Landed,
    Splashed,
    FlyingLow,
    FlyingHigh,
    SpaceLow,
    SpaceHigh,
    Escaping,
}

impl From<&str> for Situation {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "landed" => Situation::Landed,
            "splashed" => Situation::Splashed,
            "flying_low" | "flyinglow" => Situation::FlyingLow,
            "flying_high" | "flyinghigh" => Situation::FlyingHigh,
            "space_low" | "spacelow" => Situation::SpaceLow,
            "space_high" | "spacehigh" => Situation::SpaceHigh,
            "escaping" => Situation::Escaping,
            other => {
                warn!("Unknown situation '{other}', assuming high space");
                Situation::SpaceHigh
            }
        }
    }
}
