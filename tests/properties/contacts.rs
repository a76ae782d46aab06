//! Property tests for the contact predicate.

use proptest::prelude::*;

use tomerater::{is_valid_contact, ContactId};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: local@domain with an allowed suffix is always accepted.
    #[test]
    fn property_well_formed_contacts_are_valid(
        local in "[a-z0-9._]{1,12}",
        domain in "[a-z0-9-]{1,12}",
        suffix in prop_oneof![Just(".com"), Just(".edu"), Just(".org")],
    ) {
        let value = format!("{}@{}{}", local, domain, suffix);
        prop_assert!(is_valid_contact(&value));
        let parsed = ContactId::parse(value.clone()).unwrap();
        prop_assert_eq!(parsed.as_str(), value.as_str());
    }

    /// PROPERTY: without an '@' nothing is accepted.
    #[test]
    fn property_contacts_without_at_are_invalid(value in "[a-z0-9.]{0,20}") {
        prop_assert!(!is_valid_contact(&value));
        prop_assert!(ContactId::parse(value).is_err());
    }

    /// PROPERTY: any other suffix is rejected.
    #[test]
    fn property_other_suffixes_are_invalid(
        local in "[a-z]{1,8}",
        suffix in "\\.(net|io|co|gov|comx|orgs)",
    ) {
        let value = format!("{}@example{}", local, suffix);
        prop_assert!(!is_valid_contact(&value));
    }
}
