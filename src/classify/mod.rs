//! Partitioning of the instrument set into complete and available, with the
//! mode-sensitive eligibility rule applied per instrument.

mod classifier;
mod eligibility;

pub use classifier::{ClassificationResult, ExperimentClassifier};
pub use eligibility::EligibilityRule;

#[cfg(test)]
mod tests;
