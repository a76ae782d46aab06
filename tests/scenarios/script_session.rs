//! Scenario: A Scripted Session
//!
//! Journey: The same library is described once in a catalog script and
//! replayed into a fresh registry, then reported on.
//!
//! Steps:
//! 1. Parse the script (TOML, JSON, or YAML)
//! 2. Apply it to a registry
//! 3. Build the report
//!
//! Success Criteria:
//! - Every format yields the same kind of catalog
//! - Refused entries become warnings; everything else still applies

use tomerater::domain::ports::NoCorrection;
use tomerater::infrastructure::{parse_script, ScriptFormat};
use tomerater::{CatalogReport, Registry, ScriptUseCase};

use crate::common::*;

/// SCENARIO: the fixture library from TOML answers every ranking
#[test]
fn scenario_library_script_report() {
    let script = parse_script(LIBRARY_TOML, ScriptFormat::Toml).unwrap();
    let mut registry = Registry::new();

    let summary = ScriptUseCase::new(&mut registry, &mut NoCorrection).apply(&script);
    assert!(summary.is_clean(), "{:?}", summary.warnings);
    assert_eq!(summary.works_created, 3);
    assert_eq!(summary.readers_registered, 3);
    assert_eq!(summary.readings_linked, 5);

    let report = CatalogReport::build(&registry, 3);
    assert_eq!(report.most_read.as_ref().unwrap().title, "Emma");
    assert_eq!(report.most_read.as_ref().unwrap().reads, 3);
    let most_read: Vec<_> = report.n_most_read.iter().map(|w| w.catalog_id.as_str()).collect();
    assert_eq!(most_read, vec!["333", "111", "222"]);
    assert_eq!(
        report.highest_rated.as_ref().unwrap().title,
        "Automate the Boring Stuff"
    );
    let ana = report.most_positive_reader.as_ref().unwrap();
    assert_eq!(ana.name, "Ana");
    assert_eq!(ana.average_rating, 3.5);
    let prolific: Vec<_> = report.n_most_prolific.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(prolific, vec!["Ana", "Bo", "Cy"]);
}

/// SCENARIO: JSON accepts catalog ids as text or numbers alike
#[test]
fn scenario_json_script_mixes_id_forms() {
    let script = parse_script(LIBRARY_JSON, ScriptFormat::Json).unwrap();
    let mut registry = Registry::new();

    let summary = ScriptUseCase::new(&mut registry, &mut NoCorrection).apply(&script);

    assert!(summary.is_clean(), "{:?}", summary.warnings);
    assert_eq!(registry.reader("ana@test.com").unwrap().works_read(), 2);
    assert_eq!(registry.catalog().count(), 2);
}

/// SCENARIO: YAML ratings given as text are coerced
#[test]
fn scenario_yaml_text_rating_is_coerced() {
    let script = parse_script(LIBRARY_YAML, ScriptFormat::Yaml).unwrap();
    let mut registry = Registry::new();

    ScriptUseCase::new(&mut registry, &mut NoCorrection).apply(&script);

    let dune = registry.find_work("222").unwrap();
    assert_eq!(registry.work(dune).unwrap().average_rating(), 3.5);
    assert_eq!(registry.reader("ana@test.com").unwrap().average_rating(), 3.5);
}

/// SCENARIO: refused entries are reported and skipped
#[test]
fn scenario_troubled_script_collects_warnings() {
    let script = parse_script(TROUBLED_TOML, ScriptFormat::Toml).unwrap();
    let mut registry = Registry::new();

    let summary = ScriptUseCase::new(&mut registry, &mut NoCorrection).apply(&script);

    assert_eq!(summary.works_created, 1);
    assert_eq!(summary.readers_registered, 1);
    assert_eq!(summary.readings_linked, 1);
    assert_eq!(summary.ratings_rejected, 1);
    let messages: Vec<_> = summary.warnings.iter().map(|w| w.to_string()).collect();
    assert_eq!(messages.len(), 3, "{:?}", messages);
    assert!(messages[0].starts_with("works[1]"));
    assert!(messages[1].starts_with("readers[1]"));
    assert!(messages[2].contains("ghost@test.com"));
}
