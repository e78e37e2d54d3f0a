use crate::classify::{ClassificationResult, EligibilityRule, ExperimentClassifier};
use crate::engine::{EngineConfig, TickSignal};
use crate::host::{HostHandles, InstrumentModule, Vehicle};
use crate::tracking::{BiomeResolver, Situation, StateSnapshot, StateTracker};
use crate::{event, info, log};
use std::sync::Arc;

/// The published output of the last recompute. Snapshot and classification
/// are replaced together as one value, so a reader never observes a
/// snapshot paired with a stale classification or vice versa.
#[derive(Debug)]
pub struct Published {
    snapshot: StateSnapshot,
    result: ClassificationResult,
}

impl Published {
    fn new(snapshot: StateSnapshot, result: ClassificationResult) -> Self {
        Self { snapshot, result }
    }

    pub fn snapshot(&self) -> &StateSnapshot { &self.snapshot }

    pub fn result(&self) -> &ClassificationResult { &self.result }
}

/// Tick-driven engine tying the tracker and classifier together. The host
/// constructs one engine per session, maps its lifecycle hooks to
/// [`Engine::start`] / [`Engine::stop`] and calls [`Engine::on_tick`] once
/// per fixed simulation step.
pub struct Engine {
    host: HostHandles,
    config: EngineConfig,
    tracker: StateTracker,
    classifier: ExperimentClassifier,
    published: Option<Published>,
    running: bool,
}

impl Engine {
    pub fn new(host: HostHandles, config: EngineConfig) -> Self {
        let tracker = StateTracker::new(BiomeResolver::new(host.biomes()), host.situations());
        let classifier = ExperimentClassifier::new(EligibilityRule::new(config.home_body()));
        Self { host, config, tracker, classifier, published: None, running: false }
    }

    /// Maps the host's activate hook. Idempotent; the first tick after a
    /// start always recomputes because no snapshot is live.
    pub fn start(&mut self) {
        if !self.running {
            info!("Engine started in {} mode, home body {}", self.config.mode(), self.config.home_body());
        }
        self.running = true;
    }

    /// Maps the host's deactivate hook and discards the published pair.
    pub fn stop(&mut self) {
        if self.running {
            info!("Engine stopped");
        }
        self.running = false;
        self.clear();
    }

    pub fn is_running(&self) -> bool { self.running }

    /// One synchronous pass: change check, and on a confirmed change the
    /// re-snapshot, instrument enumeration, classification and publication.
    /// Publication is the last step of the tick, which is all the atomicity
    /// the single simulation thread needs.
    pub fn on_tick(&mut self) -> TickSignal {
        if !self.running {
            return TickSignal::Idle;
        }
        let Some(vehicle) = self.host.vehicles().active_vehicle() else {
            self.clear();
            return TickSignal::Idle;
        };
        if !vehicle.loaded() {
            self.clear();
            return TickSignal::Idle;
        }
        let previous = self.published.as_ref().map(Published::snapshot);
        if !self.tracker.has_changed(previous, &vehicle) {
            return TickSignal::Idle;
        }
        self.recompute(&vehicle);
        TickSignal::Recomputed
    }

    fn recompute(&mut self, vehicle: &Vehicle) {
        let snapshot = self.tracker.snapshot(vehicle);
        let instruments = self.host.vehicles().instruments_of(vehicle.id());
        let levels = self.host.facilities().levels();
        let result = self.classifier.classify(
            &instruments,
            snapshot.situation(),
            vehicle.body(),
            self.config.mode(),
            &levels,
        );
        log!(
            "State moved to {} / {} / '{}': {} available, {} complete",
            snapshot.body(),
            snapshot.situation(),
            snapshot.biome(),
            result.available().len(),
            result.complete().len()
        );
        self.published = Some(Published::new(snapshot, result));
    }

    fn clear(&mut self) {
        if self.published.take().is_some() {
            event!("Published state discarded, no loaded vehicle");
        }
    }

    /// The live snapshot/classification pair, absent while idle with no
    /// loaded vehicle.
    pub fn published(&self) -> Option<&Published> { self.published.as_ref() }

    /// Current biome label for the status display, empty while nothing is
    /// published.
    pub fn biome(&self) -> &str {
        self.published.as_ref().map_or("", |p| p.snapshot.biome())
    }

    /// Current situation for the status display.
    pub fn situation(&self) -> Option<Situation> {
        self.published.as_ref().map(|p| p.snapshot.situation())
    }

    /// Current body identity for the status display, empty while nothing is
    /// published.
    pub fn body(&self) -> &str {
        self.published.as_ref().map_or("", |p| p.snapshot.body())
    }

    /// Instruments currently eligible to run, for the action list.
    pub fn available(&self) -> &[Arc<InstrumentModule>] {
        self.published.as_ref().map_or(&[], |p| p.result.available())
    }

    /// Instruments that already produced a result.
    pub fn complete(&self) -> &[Arc<InstrumentModule>] {
        self.published.as_ref().map_or(&[], |p| p.result.complete())
    }
}
