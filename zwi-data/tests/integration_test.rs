//! Integration tests over the bundled fixtures, exercising the same files
//! the CLI ships with.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use zwi_data::loader;
use zwi_data::validate_fixtures;
use zwi_data::FixtureSet;

const DIRECTORY_JSON: &str = include_str!("../../fixtures/directory.json");
const RESOURCES_JSON: &str = include_str!("../../fixtures/resources.json");
const CAMPAIGNS_JSON: &str = include_str!("../../fixtures/campaigns.json");
const EVENTS_JSON: &str = include_str!("../../fixtures/events.json");
const CONFIG_JSON: &str = include_str!("../../fixtures/calculator.config.json");

fn bundled_set() -> FixtureSet {
    FixtureSet {
        directory: loader::load_directory(DIRECTORY_JSON.as_bytes()).unwrap(),
        resources: loader::load_resources(RESOURCES_JSON.as_bytes()).unwrap(),
        campaigns: loader::load_campaigns(CAMPAIGNS_JSON.as_bytes()).unwrap(),
        events: loader::load_events(EVENTS_JSON.as_bytes()).unwrap(),
        config: loader::load_config(CONFIG_JSON.as_bytes()).unwrap(),
    }
}

#[test]
fn bundled_directory_parses_with_expected_shape() {
    let directory = loader::load_directory(DIRECTORY_JSON.as_bytes()).unwrap();

    assert_eq!(directory.len(), 8);

    let melati = directory.iter().find(|e| e.id == "dir-001").unwrap();
    assert_eq!(melati.entry_type, "waste bank");
    assert_eq!(melati.coords, Some([106.8456, -6.2088]));
    assert!(melati.verified);

    // The national network intentionally has no pin.
    let network = directory.iter().find(|e| e.id == "dir-007").unwrap();
    assert_eq!(network.coords, None);
}

#[test]
fn bundled_resources_parse() {
    let resources = loader::load_resources(RESOURCES_JSON.as_bytes()).unwrap();

    assert_eq!(resources.len(), 6);
    assert!(resources.iter().any(|r| r.access_type.as_deref() == Some("registration")));
    // Sparse records (no summary) are fine.
    assert!(resources.iter().any(|r| r.summary.is_none()));
}

#[test]
fn bundled_campaigns_parse() {
    let campaigns = loader::load_campaigns(CAMPAIGNS_JSON.as_bytes()).unwrap();

    assert_eq!(campaigns.len(), 4);

    let with_cta = campaigns.iter().filter(|c| c.cta.is_some()).count();
    assert_eq!(with_cta, 2);
}

#[test]
fn bundled_events_parse_with_dates() {
    let events = loader::load_events(EVENTS_JSON.as_bytes()).unwrap();

    assert_eq!(events.len(), 5);

    let festival = events.iter().find(|e| e.id == "evt-001").unwrap();
    assert_eq!(festival.start, NaiveDate::from_ymd_opt(2026, 9, 12).unwrap());
    assert_eq!(festival.end_date(), NaiveDate::from_ymd_opt(2026, 9, 13).unwrap());
    assert!(festival.featured);
}

#[test]
fn bundled_config_drives_the_estimator() {
    let config = loader::load_config(CONFIG_JSON.as_bytes()).unwrap();

    let mut inputs = config.default_inputs();
    inputs.target_diversion_pct = 30.0;

    let results = zwi_core::calculations::ImpactEstimator::new(&config).estimate(&inputs);

    assert!((results.total_waste - 68_985_000.0).abs() < 1e-6);
    assert!((results.diverted - 20_695_500.0).abs() < 1e-6);
    assert_eq!(results.jobs, 44_495);
}

#[test]
fn bundled_fixtures_validate_clean() {
    let issues = validate_fixtures(&bundled_set());

    assert_eq!(issues, vec![]);
}

#[test]
fn csv_import_merges_into_bundled_directory() {
    let csv = "id,name,entry_type,city,province,country,lng,lat,topics,verified\n\
               dir-101,Bank Sampah Cempaka,waste bank,Semarang,Jawa Tengah,Indonesia,110.4203,-6.9667,recycling,true\n";

    let mut set = bundled_set();
    let imported = zwi_data::DirectoryCsvImporter::parse(csv.as_bytes()).unwrap();
    set.directory.extend(imported);

    assert_eq!(set.directory.len(), 9);
    assert_eq!(validate_fixtures(&set), vec![]);
}
