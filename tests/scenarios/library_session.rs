//! Scenario: A Library Session
//!
//! Journey: A librarian builds a catalog by hand through the registry.
//!
//! Steps:
//! 1. Create a reference work and register a reader
//! 2. Link a rated reading, then an unrated one by a second reader
//! 3. Try to reuse a catalog id
//! 4. Ask every ranking question
//!
//! Success Criteria:
//! - Read counts and averages follow every link
//! - Refusals leave the catalog unchanged

use tomerater::domain::ports::ScriptedCorrections;
use tomerater::{CatalogError, DuplicateCheck, RatingInput, Registry};

/// SCENARIO: first rated reading makes the work both most read and best rated
#[test]
fn scenario_first_reading_sets_every_ranking() {
    let mut registry = Registry::new();
    let manual = registry
        .create_reference_work("Automate the Boring Stuff", "Programming", "Beginner", "111")
        .unwrap();
    registry.register_reader("Ana", "ana@test.com", &[]).unwrap();

    let linked = registry.link_reading(manual, "ana@test.com", 4).unwrap();

    assert_eq!(linked.reads, 1);
    assert_eq!(registry.read_count(manual), 1);
    assert_eq!(registry.highest_rated().unwrap().catalog_id(), "111");
    assert_eq!(registry.most_read().unwrap().catalog_id(), "111");
    assert_eq!(registry.reader("ana@test.com").unwrap().average_rating(), 4.0);
    assert_eq!(registry.most_positive_reader().unwrap().name(), "Ana");
}

/// SCENARIO: an unrated second reading counts as a read but not as a rating
#[test]
fn scenario_unrated_second_reader_keeps_average() {
    let mut registry = Registry::new();
    let manual = registry
        .create_reference_work("Automate the Boring Stuff", "Programming", "Beginner", "111")
        .unwrap();
    registry.register_reader("Ana", "ana@test.com", &[]).unwrap();
    registry.register_reader("Bo", "bo@test.com", &[]).unwrap();
    registry.link_reading(manual, "ana@test.com", 4).unwrap();

    registry
        .link_reading(manual, "bo@test.com", RatingInput::Absent)
        .unwrap();

    assert_eq!(registry.read_count(manual), 2);
    assert_eq!(registry.work(manual).unwrap().average_rating(), 4.0);
    assert_eq!(registry.reader("bo@test.com").unwrap().average_rating(), 0.0);
}

/// SCENARIO: a catalog id that is already linked cannot be created again
#[test]
fn scenario_reused_catalog_id_is_refused() {
    let mut registry = Registry::new();
    let dune = registry.create_work("Dune", "42").unwrap();
    registry.register_reader("Ana", "ana@test.com", &[dune]).unwrap();

    let err = registry.create_work("Emma", "42").unwrap_err();

    assert!(matches!(err, CatalogError::DuplicateCatalogId { .. }));
    assert_eq!(registry.created_works().count(), 1);
}

/// SCENARIO: with the linked-only check, unlinked works do not reserve ids
#[test]
fn scenario_linked_only_check_allows_unlinked_duplicates() {
    let mut registry = Registry::new().with_duplicate_check(DuplicateCheck::LinkedOnly);
    registry.create_work("Dune", "42").unwrap();

    let emma = registry.create_work("Emma", "42").unwrap();

    assert_eq!(registry.work(emma).unwrap().title(), "Emma");
    assert_eq!(registry.created_works().count(), 2);
}

/// SCENARIO: rank sizes below one are errors, not empty lists
#[test]
fn scenario_non_positive_rank_sizes_are_errors() {
    let mut registry = Registry::new();
    registry.register_reader("Ana", "ana@test.com", &[]).unwrap();

    for n in [0, -1] {
        let err = registry.n_most_prolific(n).unwrap_err();
        assert!(
            matches!(err, CatalogError::InvalidRankSize { n: got } if got == n),
            "n = {}: {:?}",
            n,
            err
        );
    }
}

/// SCENARIO: an empty catalog has nothing to rank
#[test]
fn scenario_empty_catalog_has_nothing_to_rank() {
    let registry = Registry::new();

    assert!(matches!(
        registry.most_read(),
        Err(CatalogError::NothingToRank { what: "works" })
    ));
    assert!(matches!(
        registry.highest_rated(),
        Err(CatalogError::NothingToRank { what: "works" })
    ));
    assert!(matches!(
        registry.most_positive_reader(),
        Err(CatalogError::NothingToRank { what: "readers" })
    ));
}

/// SCENARIO: a full session with corrections, contact changes, and rankings
#[test]
fn scenario_full_session() {
    let mut registry = Registry::new();
    let manual = registry
        .create_reference_work("Automate the Boring Stuff", "Programming", "Beginner", "111")
        .unwrap();
    let dune = registry
        .create_narrative_work("Dune", "Frank Herbert", "222")
        .unwrap();
    let emma = registry.create_work("Emma", "333").unwrap();

    // Bo mistypes the contact; the prompt supplies a fix
    let mut prompt = ScriptedCorrections::new(["bo@school.edu"]);
    registry.register_reader("Ana", "ana@test.com", &[]).unwrap();
    registry
        .register_reader_with("Bo", "bo@school", &[emma], &mut prompt)
        .unwrap();
    registry.register_reader("Cy", "cy@club.org", &[]).unwrap();
    assert_eq!(prompt.remaining(), 0);

    registry.link_reading(manual, "ana@test.com", 4).unwrap();
    registry.link_reading(emma, "ana@test.com", 3).unwrap();
    registry.link_reading(dune, "bo@school.edu", 2).unwrap();
    registry.link_reading(emma, "cy@club.org", 1).unwrap();

    // A rating the work refuses still counts as a read
    let linked = registry.link_reading(dune, "cy@club.org", 4.5).unwrap();
    assert_eq!(linked.rejected_rating, Some(4.5));
    assert_eq!(linked.reader_rating, Some(4.5));

    registry.change_contact("cy@club.org", "cy@club.com").unwrap();
    assert!(registry.reader("cy@club.org").is_none());

    let most_read: Vec<_> = registry
        .n_most_read(3)
        .unwrap()
        .into_iter()
        .map(|w| w.catalog_id().to_string())
        .collect();
    assert_eq!(most_read, vec!["333", "222", "111"]);
    assert_eq!(registry.highest_rated().unwrap().title(), "Automate the Boring Stuff");

    let prolific: Vec<_> = registry
        .n_most_prolific(2)
        .unwrap()
        .into_iter()
        .map(|r| r.contact().to_string())
        .collect();
    assert_eq!(prolific, vec!["ana@test.com", "bo@school.edu"]);
    assert_eq!(registry.most_positive_reader().unwrap().name(), "Ana");
}
