#![no_main]

use iso3901::Isrc;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let parsed = Isrc::parse(text);
    assert_eq!(Isrc::validate(text), parsed.is_ok());

    if let Ok(isrc) = parsed {
        let compact = isrc.stringify(false);
        let hyphenated = isrc.stringify(true);
        assert_eq!(Isrc::parse(&compact).ok(), Some(isrc.clone()));
        assert_eq!(Isrc::parse(&hyphenated).ok(), Some(isrc.clone()));
        assert!(isrc.country().is_some());
    }
});
