use crate::host::vehicle::CelestialBody;
use crate::tracking::Situation;
use std::fmt::{Debug, Formatter};

/// Embedded availability test of an instrument: whether it can run in the
/// given situation on the given body. Supplied by the host per module.
pub type AvailabilityFn = Box<dyn Fn(Situation, &CelestialBody) -> bool + Send + Sync>;

/// One onboard instrument as enumerated from the active vehicle. A module
/// without a kind identifier or availability test is malformed and gets
/// skipped by the classifier instead of failing the run.
pub struct InstrumentModule {
    id: usize,
    action_name: String,
    kind: Option<String>,
    inoperable: bool,
    deployed: bool,
    collected: usize,
    availability: Option<AvailabilityFn>,
}

impl InstrumentModule {
    pub fn new(
        id: usize,
        action_name: &str,
        kind: Option<&str>,
        inoperable: bool,
        deployed: bool,
        collected: usize,
        availability: Option<AvailabilityFn>,
    ) -> Self {
        Self {
            id,
            action_name: String::from(action_name),
            kind: kind.map(String::from),
            inoperable,
            deployed,
            collected,
            availability,
        }
    }

    pub fn id(&self) -> usize { self.id }

    /// Operator-facing label for the action list.
    pub fn action_name(&self) -> &str { &self.action_name }

    pub fn kind(&self) -> Option<&str> { self.kind.as_deref() }

    pub fn inoperable(&self) -> bool { self.inoperable }

    pub fn deployed(&self) -> bool { self.deployed }

    /// Length of the collected result data, 0 if none was produced yet.
    pub fn collected(&self) -> usize { self.collected }

    pub fn has_data(&self) -> bool { self.collected > 0 }

    /// Runs the embedded availability test, `None` if the module carries none.
    pub fn is_available_while(&self, situation: Situation, body: &CelestialBody) -> Option<bool> {
        self.availability.as_ref().map(|test| test(situation, body))
    }

    pub fn is_malformed(&self) -> bool { self.kind.is_none() || self.availability.is_none() }
}

impl Debug for InstrumentModule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstrumentModule")
            .field("id", &self.id)
            .field("action_name", &self.action_name)
            .field("kind", &self.kind)
            .field("inoperable", &self.inoperable)
            .field("deployed", &self.deployed)
            .field("collected", &self.collected)
            .field("availability", &self.availability.is_some())
            .finish()
    }
}
