//! Property-based tests for parsing and formatting.

use iso3901::{Allocation, Isrc};
use proptest::prelude::*;

fn allocated_prefix() -> impl Strategy<Value = String> {
    let prefixes: Vec<String> = Allocation::all().map(|e| e.prefix.to_string()).collect();
    proptest::sample::select(prefixes)
}

prop_compose! {
    fn valid_code()(
        prefix in allocated_prefix(),
        owner in "[A-Z0-9]{3}",
        year in 0u8..100,
        designation in 0u32..100_000,
    ) -> (String, String, u8, u32) {
        let compact = format!("{prefix}{owner}{year:02}{designation:05}");
        (compact, format!("{prefix}{owner}"), year, designation)
    }
}

proptest! {
    #[test]
    fn compact_and_hyphenated_round_trip((compact, owner, year, designation) in valid_code()) {
        let isrc = Isrc::parse(&compact).unwrap();
        prop_assert_eq!(isrc.owner(), owner.as_str());
        prop_assert_eq!(isrc.year(), year);
        prop_assert_eq!(isrc.designation(), designation);
        prop_assert_eq!(isrc.stringify(false), compact.clone());

        let hyphenated = isrc.stringify(true);
        let again = Isrc::parse(&hyphenated).unwrap();
        prop_assert_eq!(&again, &isrc);
        prop_assert_eq!(again.stringify(true), hyphenated);
    }

    #[test]
    fn case_and_label_do_not_matter((compact, _owner, _year, _designation) in valid_code()) {
        let norm = Isrc::parse(&compact).unwrap();
        prop_assert_eq!(Isrc::parse(&compact.to_lowercase()).unwrap(), norm.clone());
        prop_assert_eq!(Isrc::parse(&format!("ISRC {compact}")).unwrap(), norm);
    }

    #[test]
    fn validate_agrees_with_parse(text in "\\PC{0,20}") {
        prop_assert_eq!(Isrc::validate(&text), Isrc::parse(&text).is_ok());
    }

    #[test]
    fn validate_agrees_with_parse_near_valid(text in "(isrc |ISRC )?[A-Za-z]{2}-?[A-Za-z0-9]{2,4}-?[0-9]{1,3}-?[0-9]{4,6}") {
        prop_assert_eq!(Isrc::validate(&text), Isrc::parse(&text).is_ok());
    }
}
