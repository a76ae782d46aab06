//! Property tests for rating bounds on readers and works.

use proptest::prelude::*;

use tomerater::{CatalogError, ContactId, Reader, Work};

fn any_rating() -> impl Strategy<Value = f64> {
    prop_oneof![
        -10.0f64..10.0,
        Just(0.0),
        Just(4.0),
        Just(4.999),
        Just(5.0),
    ]
}

fn reader() -> Reader {
    Reader::new("Ana", ContactId::parse("ana@test.com").unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a reader keeps `r` exactly when `0 <= r < 5`.
    #[test]
    fn property_reader_keeps_only_ratings_below_five(rating in any_rating()) {
        let mut reader = reader();
        let work = Work::new("Dune", "1");

        let stored = reader.record_reading(&work, rating);

        let expected = (0.0..5.0).contains(&rating).then_some(rating);
        prop_assert_eq!(stored, expected);
        prop_assert_eq!(reader.rating_for(&work.key()), expected);
    }

    /// PROPERTY: a work appends `r` exactly when `0 <= r <= 4`, otherwise reports it.
    #[test]
    fn property_work_keeps_only_ratings_up_to_four(rating in any_rating()) {
        let mut work = Work::new("Dune", "1");

        let result = work.add_rating(rating);

        if (0.0..=4.0).contains(&rating) {
            prop_assert_eq!(result.unwrap(), Some(rating));
            prop_assert_eq!(work.ratings(), &[rating][..]);
        } else {
            let is_invalid = matches!(result, Err(CatalogError::InvalidRating { .. }));
            prop_assert!(is_invalid);
            prop_assert!(work.ratings().is_empty());
        }
    }

    /// PROPERTY: text that is not a number never changes a work.
    #[test]
    fn property_work_ignores_non_numeric_text(text in "[a-zA-Z ]{0,12}") {
        prop_assume!(text.trim().parse::<f64>().is_err());
        let mut work = Work::new("Dune", "1");

        prop_assert_eq!(work.add_rating(text.as_str()).unwrap(), None);
        prop_assert!(work.ratings().is_empty());
    }

    /// PROPERTY: a work's average stays within the accepted range and is stable.
    #[test]
    fn property_work_average_is_bounded_and_idempotent(
        ratings in proptest::collection::vec(any_rating(), 0..16)
    ) {
        let mut work = Work::new("Dune", "1");
        for rating in &ratings {
            let _ = work.add_rating(*rating);
        }

        let average = work.average_rating();
        prop_assert!((0.0..=4.0).contains(&average));
        prop_assert_eq!(average, work.average_rating());
        if work.ratings().is_empty() {
            prop_assert_eq!(average, 0.0);
        }
    }
}
