//! Tick-driven situational state tracking and instrument eligibility
//! classification for a simulated vehicle. The host drives [`Engine::on_tick`]
//! once per fixed simulation step; the engine re-partitions the vehicle's
//! instruments only when the tracked state actually changed and publishes the
//! snapshot and classification as one atomically replaced pair.
#![allow(clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]

mod classify;
mod engine;
mod host;
mod tracking;
pub mod util;

pub use classify::{ClassificationResult, EligibilityRule, ExperimentClassifier};
pub use engine::{Engine, EngineConfig, Published, TickSignal};
pub use host::{
    AvailabilityFn, BiomeMap, CelestialBody, FacilityLevels, FacilityQuery, GameMode, HostHandles,
    InstrumentModule, SituationSource, Vehicle, VehicleSource,
};
pub use tracking::{BiomeResolver, Situation, StateSnapshot, StateTracker};
