use super::{CelestialBody, GameMode, InstrumentModule};
use crate::tracking::Situation;

#[test]
fn game_mode_parses_from_host_strings() {
    assert_eq!(GameMode::from("career"), GameMode::Career);
    assert_eq!(GameMode::from("Sandbox"), GameMode::Sandbox);
    assert_eq!(GameMode::from("SCIENCE_SANDBOX"), GameMode::ScienceSandbox);
    assert_eq!(GameMode::from("speedrun"), GameMode::Sandbox);
}

#[test]
fn instrument_reports_missing_capabilities() {
    let intact = InstrumentModule::new(
        1,
        "Log Pressure",
        Some("barometer"),
        false,
        false,
        0,
        Some(Box::new(|_, _| true)),
    );
    let no_kind =
        InstrumentModule::new(2, "Mystery Device", None, false, false, 0, Some(Box::new(|_, _| true)));
    let no_test = InstrumentModule::new(3, "Detached Sensor", Some("barometer"), false, false, 0, None);
    assert!(!intact.is_malformed());
    assert!(no_kind.is_malformed());
    assert!(no_test.is_malformed());
    assert_eq!(no_test.is_available_while(Situation::Landed, &CelestialBody::new("Mun", false)), None);
}

#[test]
fn availability_test_receives_the_context() {
    let mun_only = InstrumentModule::new(
        4,
        "Scan Regolith",
        Some("gravScan"),
        false,
        false,
        0,
        Some(Box::new(|situation, body| situation == Situation::Landed && body.name() == "Mun")),
    );
    let mun = CelestialBody::new("Mun", false);
    let kerbin = CelestialBody::new("Kerbin", true);
    assert_eq!(mun_only.is_available_while(Situation::Landed, &mun), Some(true));
    assert_eq!(mun_only.is_available_while(Situation::SpaceLow, &mun), Some(false));
    assert_eq!(mun_only.is_available_while(Situation::Landed, &kerbin), Some(false));
}
