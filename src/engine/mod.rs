//! Composition root: per-tick orchestration of change detection and
//! classification, and atomic publication of the snapshot/result pair for
//! the presentation layer.

mod config;
mod engine;
mod signal;

pub use config::EngineConfig;
pub use engine::{Engine, Published};
pub use signal::TickSignal;
