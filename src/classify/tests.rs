use super::{EligibilityRule, ExperimentClassifier};
use crate::host::{CelestialBody, FacilityLevels, GameMode, InstrumentModule};
use crate::tracking::Situation;
use itertools::Itertools;
use std::sync::Arc;
use strum::IntoEnumIterator;

const HOME: &str = "Kerbin";

fn rule() -> EligibilityRule { EligibilityRule::new(HOME) }

fn classifier() -> ExperimentClassifier { ExperimentClassifier::new(rule()) }

fn home() -> CelestialBody { CelestialBody::new(HOME, true) }

fn duna() -> CelestialBody { CelestialBody::new("Duna", true) }

fn levels(cost_limit: f64, eva: bool) -> FacilityLevels { FacilityLevels::new(cost_limit, eva) }

fn instrument(
    id: usize,
    kind: &str,
    flags: (bool, bool),
    collected: usize,
    available: bool,
) -> Arc<InstrumentModule> {
    Arc::new(InstrumentModule::new(
        id,
        &format!("Run {kind}"),
        Some(kind),
        flags.0,
        flags.1,
        collected,
        Some(Box::new(move |_, _| available)),
    ))
}

fn thermometer(id: usize) -> Arc<InstrumentModule> {
    instrument(id, "thermometer", (false, false), 0, true)
}

fn surface_sample(id: usize) -> Arc<InstrumentModule> {
    instrument(id, "surfaceSample", (false, false), 0, true)
}

fn ids(list: &[Arc<InstrumentModule>]) -> Vec<usize> {
    list.iter().map(|i| i.id()).collect_vec()
}

#[test]
fn base_condition_requires_operable_undeployed_available() {
    let rule = rule();
    let ctx = levels(1000.0, true);
    let ok = thermometer(1);
    let inoperable = instrument(2, "thermometer", (true, false), 0, true);
    let deployed = instrument(3, "thermometer", (false, true), 0, true);
    let unavailable = instrument(4, "thermometer", (false, false), 0, false);
    for mode in [GameMode::Sandbox, GameMode::Career, GameMode::ScienceSandbox] {
        assert!(rule.is_eligible(&ok, Situation::Landed, &home(), mode, &ctx));
        assert!(!rule.is_eligible(&inoperable, Situation::Landed, &home(), mode, &ctx));
        assert!(!rule.is_eligible(&deployed, Situation::Landed, &home(), mode, &ctx));
        assert!(!rule.is_eligible(&unavailable, Situation::Landed, &home(), mode, &ctx));
    }
}

#[test]
fn availability_test_sees_situation_and_body() {
    let rule = rule();
    let landed_only = Arc::new(InstrumentModule::new(
        1,
        "Take Surface Sample",
        Some("surfaceSample"),
        false,
        false,
        0,
        Some(Box::new(|situation, _body| situation == Situation::Landed)),
    ));
    for situation in Situation::iter() {
        let expect: bool = situation == Situation::Landed;
        assert_eq!(
            rule.is_eligible(&landed_only, situation, &home(), GameMode::Sandbox, &levels(0.0, false)),
            expect
        );
    }
}

#[test]
fn career_surface_sample_needs_cost_limit() {
    let rule = rule();
    let sample = surface_sample(1);
    // below the limit nothing helps, on any body
    for body in [home(), duna()] {
        for eva in [false, true] {
            assert!(!rule.is_eligible(
                &sample,
                Situation::Landed,
                &body,
                GameMode::Career,
                &levels(300.0, eva)
            ));
        }
    }
}

#[test]
fn career_surface_sample_home_body_passes_without_eva() {
    let rule = rule();
    let sample = surface_sample(1);
    assert!(rule.is_eligible(
        &sample,
        Situation::Landed,
        &home(),
        GameMode::Career,
        &levels(600.0, false)
    ));
}

#[test]
fn career_surface_sample_off_home_needs_eva() {
    let rule = rule();
    let sample = surface_sample(1);
    let ctx_no_eva = levels(600.0, false);
    let ctx_eva = levels(600.0, true);
    assert!(!rule.is_eligible(&sample, Situation::Landed, &duna(), GameMode::Career, &ctx_no_eva));
    assert!(rule.is_eligible(&sample, Situation::Landed, &duna(), GameMode::Career, &ctx_eva));
}

#[test]
fn facility_gate_is_career_only() {
    let rule = rule();
    let sample = surface_sample(1);
    let ctx = levels(0.0, false);
    assert!(rule.is_eligible(&sample, Situation::Landed, &duna(), GameMode::Sandbox, &ctx));
    assert!(rule.is_eligible(&sample, Situation::Landed, &duna(), GameMode::ScienceSandbox, &ctx));
}

#[test]
fn facility_gate_skips_other_kinds() {
    let rule = rule();
    let thermo = thermometer(1);
    assert!(rule.is_eligible(&thermo, Situation::Landed, &duna(), GameMode::Career, &levels(0.0, false)));
}

#[test]
fn rule_is_deterministic() {
    let rule = rule();
    let sample = surface_sample(1);
    let ctx = levels(600.0, true);
    let first = rule.is_eligible(&sample, Situation::Landed, &duna(), GameMode::Career, &ctx);
    for _ in 0..10 {
        assert_eq!(
            rule.is_eligible(&sample, Situation::Landed, &duna(), GameMode::Career, &ctx),
            first
        );
    }
}

#[test]
fn completed_instrument_takes_precedence() {
    // holds data and would also be eligible
    let done_eligible = instrument(1, "thermometer", (false, false), 5, true);
    // holds data but is inoperable and unavailable
    let done_broken = instrument(2, "barometer", (true, false), 12, false);
    let result = classifier().classify(
        &[done_eligible, done_broken],
        Situation::Landed,
        &home(),
        GameMode::Sandbox,
        &levels(0.0, false),
    );
    assert_eq!(ids(result.complete()), vec![1, 2]);
    assert!(result.available().is_empty());
}

#[test]
fn partition_is_disjoint_and_stable() {
    let set = vec![
        instrument(1, "thermometer", (false, false), 3, true), // complete
        thermometer(2),                                        // available
        instrument(3, "barometer", (false, false), 0, false),  // neither
        instrument(4, "gravScan", (false, false), 1, false),   // complete
        instrument(5, "seismometer", (false, false), 0, true), // available
        instrument(6, "barometer", (true, false), 0, true),    // neither
        thermometer(7),                                        // available
    ];
    let result = classifier().classify(
        &set,
        Situation::Landed,
        &home(),
        GameMode::Sandbox,
        &levels(0.0, false),
    );
    assert_eq!(ids(result.complete()), vec![1, 4]);
    assert_eq!(ids(result.available()), vec![2, 5, 7]);
    let overlap = ids(result.complete())
        .into_iter()
        .chain(ids(result.available()))
        .duplicates()
        .collect_vec();
    assert!(overlap.is_empty(), "instrument in both lists: {overlap:?}");
}

#[test]
fn malformed_entries_are_dropped() {
    let no_kind = Arc::new(InstrumentModule::new(
        1,
        "Mystery Device",
        None,
        false,
        false,
        9,
        Some(Box::new(|_, _| true)),
    ));
    let no_availability =
        Arc::new(InstrumentModule::new(2, "Detached Sensor", Some("thermometer"), false, false, 0, None));
    let intact = thermometer(3);
    let result = classifier().classify(
        &[no_kind, no_availability, intact],
        Situation::Landed,
        &home(),
        GameMode::Sandbox,
        &levels(0.0, false),
    );
    assert_eq!(ids(result.complete()), Vec::<usize>::new());
    assert_eq!(ids(result.available()), vec![3]);
}

#[test]
fn empty_set_classifies_to_empty_lists() {
    let result =
        classifier().classify(&[], Situation::SpaceHigh, &duna(), GameMode::Career, &levels(600.0, true));
    assert!(result.complete().is_empty());
    assert!(result.available().is_empty());
}
