mod biome;
mod situation;
mod state_tracker;

pub use biome::BiomeResolver;
pub use situation::Situation;
pub use state_tracker::{StateSnapshot, StateTracker};
