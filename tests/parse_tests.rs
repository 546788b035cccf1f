//! Parsing tests covering presentation forms, malformed input and real-world codes.

use iso3901::{ErrorKind, Isrc, Segment};

fn kind_of(code: &str) -> ErrorKind {
    Isrc::parse(code).unwrap_err().kind()
}

#[test]
fn test_case_insensitive() {
    let norm = Isrc::parse("ZZZZZ1234567").unwrap();
    for code in ["zzzzz1234567", "zzZZz1234567"] {
        assert_eq!(Isrc::parse(code).unwrap(), norm, "{code}");
    }
}

#[test]
fn test_presentation_forms() {
    let norm = Isrc::parse("ZZZZZ1234567").unwrap();
    for prefix in ["", "ISRC "] {
        for code in ["ZZZZZ1234567", "ZZ-ZZZ-12-34567"] {
            let text = format!("{prefix}{code}");
            assert_eq!(Isrc::parse(&text).unwrap(), norm, "{text}");
        }
    }
}

#[test]
fn test_round_trip() {
    assert_eq!(Isrc::parse("ZZZZZ1234567").unwrap().to_string(), "ZZZZZ1234567");
    assert_eq!(
        Isrc::parse("ZZ-ZZZ-12-34567").unwrap().stringify(true),
        "ZZ-ZZZ-12-34567"
    );
    assert_eq!(
        Isrc::parse("ZZZZZ1234567").unwrap().stringify(true),
        "ZZ-ZZZ-12-34567"
    );
    assert_eq!(
        Isrc::parse("ZZ-ZZZ-12-34567").unwrap().stringify(false),
        "ZZZZZ1234567"
    );
}

#[test]
fn test_illegal_segments() {
    assert_eq!(kind_of("ZZ-ZZZ-123-4567"), ErrorKind::WrongLength);
    assert_eq!(kind_of("ZZ-ZZZ-1234567"), ErrorKind::WrongSegmentCount);
    assert_eq!(kind_of("ZZZ-ZZ1-23-4567"), ErrorKind::WrongLength);
    assert_eq!(kind_of("ZZ-ZZ-Z12-345-67"), ErrorKind::WrongSegmentCount);
}

#[test]
fn test_illegal_characters() {
    for code in [
        "ZZ-ZZZ-12?34567",
        "ZZ\u{2013}ZZZ-12-34567",
        " ZZ-ZZZ-12-34567",
        "(ZZ-ZZZ-12-34567)",
    ] {
        let kind = kind_of(code);
        assert!(
            matches!(
                kind,
                ErrorKind::WrongSegmentCount
                    | ErrorKind::WrongLength
                    | ErrorKind::InvalidCharacterClass
            ),
            "{code}: {kind:?}"
        );
        assert!(!Isrc::validate(code));
    }
}

#[test]
fn test_non_ascii_dash_is_counted_per_character() {
    // The en dash makes the head split into three parts only.
    assert_eq!(kind_of("ZZ\u{2013}ZZZ-12-34567"), ErrorKind::WrongSegmentCount);
    // Without any ASCII hyphen the compact slicing sees the en dash itself.
    let err = Isrc::parse("ZZ\u{2013}ZZ1234567").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCharacterClass);
    assert_eq!(err.segment(), Some(Segment::Owner));
}

#[test]
fn test_length_checked_before_class() {
    let err = Isrc::parse("Z!-ZZZ-12-3456").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WrongLength);
    assert_eq!(err.segment(), Some(Segment::Designation));
}

#[test]
fn test_illegal_prefix() {
    for code in ["QX1234567890", "ZY-XWV-76-54321"] {
        assert_eq!(kind_of(code), ErrorKind::UnknownPrefix, "{code}");
    }
    assert_eq!(
        Isrc::parse("QX1234567890").unwrap_err().to_string(),
        "First segment \"QX\" is not a known ISRC prefix"
    );
}

#[test]
fn test_retired_prefix_parses() {
    let isrc = Isrc::parse("CS-A12-04-00001").unwrap();
    assert!(isrc.retired());
    assert_eq!(isrc.country().unwrap().name, "Serbia and Montenegro");
}

#[test]
fn test_real_world_examples() {
    for code in [
        "NLA508700208",
        "HUA251232713",
        "FROV65736517",
        "GBBBB9905305",
        "USDO19800058",
        "JPA840501147",
        "HKI198590203",
    ] {
        let isrc = Isrc::parse(code).unwrap_or_else(|e| panic!("{code}: {e}"));
        assert_eq!(isrc.to_string(), code);
        assert!(!isrc.retired());
    }
}

#[test]
fn test_raw_preserved() {
    for code in ["zz-zzz-12-34567", "ISRC ZZ-ZZZ-12-34567", "ZZZZZ1234567 trailing"] {
        assert_eq!(Isrc::parse(code).unwrap().raw(), Some(code));
    }
}
