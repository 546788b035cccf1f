//! The ISRC value object.
//!
//! An [`Isrc`] is either parsed from text with [`Isrc::parse`], which
//! validates every segment and the prefix, or assembled from its components
//! with [`Isrc::new`], which validates nothing. Derived properties
//! ([`Isrc::country`], [`Isrc::agency`], [`Isrc::retired`]) look the prefix up
//! in the allocation table on every call and degrade gracefully when the
//! prefix is unknown.

use crate::agency::Agency;
use crate::allocation::{Allocation, AllocationEntry};
use crate::country::CountryRecord;
use crate::error::{IsrcError, Result};
use crate::parser::parse_segments;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// International Standard Recording Code, as defined in ISO 3901.
///
/// Equality and hashing consider only the owner code, year and designation;
/// the original text kept by [`Isrc::parse`] does not take part.
///
/// # Examples
///
/// ```
/// use iso3901::Isrc;
///
/// let isrc = Isrc::parse("ISRC nl-a50-87-00208").unwrap();
/// assert_eq!(isrc.to_string(), "NLA508700208");
/// assert_eq!(isrc.stringify(true), "NL-A50-87-00208");
/// assert_eq!(isrc.country().unwrap().name, "Netherlands");
/// assert_eq!(isrc.raw(), Some("ISRC nl-a50-87-00208"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Isrc {
    owner: String,
    year: u8,
    designation: u32,
    #[serde(skip)]
    raw: Option<String>,
}

impl Isrc {
    /// Assemble an ISRC from its components without any validation.
    ///
    /// The owner code should be two letters followed by three letters or
    /// digits, the year should fit two digits and the designation five, but
    /// none of this is checked. Such a value may hold an unallocated prefix,
    /// in which case [`country`](Self::country) and [`agency`](Self::agency)
    /// return `None` and [`retired`](Self::retired) returns `true`.
    #[must_use]
    pub fn new(owner: impl Into<String>, year: u8, designation: u32) -> Self {
        Isrc {
            owner: owner.into(),
            year,
            designation,
            raw: None,
        }
    }

    /// Parse an ISRC from `CCOOOYYNNNNN` or `CC-OOO-YY-NNNNN` text,
    /// optionally prefixed with `ISRC `.
    ///
    /// Matching ignores ASCII case and any text after the code. The prefix
    /// must be allocated (currently or formerly). The untouched input is kept
    /// and available through [`raw`](Self::raw).
    ///
    /// # Errors
    ///
    /// Returns [`IsrcError::WrongSegmentCount`], [`IsrcError::WrongLength`],
    /// [`IsrcError::InvalidCharacterClass`] or [`IsrcError::UnknownPrefix`].
    pub fn parse(raw: &str) -> Result<Self> {
        let segments = parse_segments(raw)?;
        Ok(Isrc {
            owner: segments.owner_code(),
            year: segments.year,
            designation: segments.designation,
            raw: Some(raw.to_string()),
        })
    }

    /// Whether [`parse`](Self::parse) would accept `raw`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso3901::Isrc;
    ///
    /// assert!(Isrc::validate("USDO19800058"));
    /// assert!(!Isrc::validate("QX1234567890"));
    /// ```
    #[must_use]
    pub fn validate(raw: &str) -> bool {
        parse_segments(raw).is_ok()
    }

    /// Five-character registrant code, prefix included.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Last two digits of the reference year.
    #[must_use]
    pub fn year(&self) -> u8 {
        self.year
    }

    /// Designation code, unique within the registrant and year.
    #[must_use]
    pub fn designation(&self) -> u32 {
        self.designation
    }

    /// Original text, if this value came from [`parse`](Self::parse).
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Split the owner code after its second character.
    fn owner_parts(&self) -> (&str, &str) {
        let split = self
            .owner
            .char_indices()
            .nth(2)
            .map_or(self.owner.len(), |(idx, _)| idx);
        self.owner.split_at(split)
    }

    /// First two characters of the owner code.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.owner_parts().0
    }

    /// Allocation table entry for the prefix, if it is allocated.
    #[must_use]
    pub fn allocation(&self) -> Option<&'static AllocationEntry> {
        Allocation::lookup(self.prefix())
    }

    /// Territory represented by the prefix.
    ///
    /// Usually the same as the ISO 3166 territory with that alpha-2 code,
    /// with exceptions for shared, worldwide and retired prefixes.
    #[must_use]
    pub fn country(&self) -> Option<&'static CountryRecord> {
        self.allocation().map(|entry| &entry.country)
    }

    /// Agency allocating the prefix.
    #[must_use]
    pub fn agency(&self) -> Option<Agency> {
        self.allocation().map(|entry| entry.agency)
    }

    /// Display name of the agency allocating the prefix.
    #[must_use]
    pub fn agency_name(&self) -> Option<&'static str> {
        self.agency().map(Agency::name)
    }

    /// Whether the prefix is retired.
    ///
    /// An unallocated prefix also counts as retired.
    #[must_use]
    pub fn retired(&self) -> bool {
        self.allocation().map_or(true, |entry| entry.retired)
    }

    /// Format the code from its components, with or without hyphens.
    ///
    /// The original text is never used.
    #[must_use]
    pub fn stringify(&self, with_separator: bool) -> String {
        let (prefix, registrant) = self.owner_parts();
        let sep = if with_separator { "-" } else { "" };
        format!(
            "{prefix}{sep}{registrant}{sep}{:02}{sep}{:05}",
            self.year, self.designation
        )
    }
}

impl PartialEq for Isrc {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner
            && self.year == other.year
            && self.designation == other.designation
    }
}

impl Eq for Isrc {}

impl Hash for Isrc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.year.hash(state);
        self.designation.hash(state);
    }
}

impl fmt::Display for Isrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify(false))
    }
}

impl FromStr for Isrc {
    type Err = IsrcError;

    fn from_str(s: &str) -> Result<Self> {
        Isrc::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_does_not_validate() {
        let isrc = Isrc::new("QX123", 45, 67890);
        assert_eq!(isrc.prefix(), "QX");
        assert!(isrc.country().is_none());
        assert!(isrc.agency().is_none());
        assert!(isrc.retired());
        assert!(isrc.raw().is_none());
    }

    #[test]
    fn test_zero_padding() {
        let isrc = Isrc::new("USABC", 5, 42);
        assert_eq!(isrc.stringify(true), "US-ABC-05-00042");
        assert_eq!(isrc.to_string(), "USABC0500042");
    }

    #[test]
    fn test_short_owner_does_not_panic() {
        let isrc = Isrc::new("U", 1, 1);
        assert_eq!(isrc.prefix(), "U");
        assert_eq!(isrc.stringify(true), "U--01-00001");

        let isrc = Isrc::new("ÜSABC", 1, 1);
        assert_eq!(isrc.prefix(), "ÜS");
        assert!(isrc.retired());
    }

    #[test]
    fn test_equality_ignores_raw() {
        let parsed = Isrc::parse("zz-zzz-12-34567").unwrap();
        let built = Isrc::new("ZZZZZ", 12, 34567);
        assert_eq!(parsed, built);
        assert_ne!(parsed.raw(), built.raw());

        let set: HashSet<_> = [parsed, built].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_agency_name() {
        let isrc = Isrc::parse("ISRC ZZ-ZZZ-12-34567").unwrap();
        assert_eq!(isrc.agency(), Some(Agency::Iira));
        assert_eq!(
            isrc.agency_name(),
            Some("International ISRC Registration Authority")
        );
    }

    #[test]
    fn test_from_str() {
        let isrc: Isrc = "JPA840501147".parse().unwrap();
        assert_eq!(isrc.owner(), "JPA84");
        assert_eq!(isrc.year(), 5);
        assert_eq!(isrc.designation(), 1147);
        assert!("JP-A84".parse::<Isrc>().is_err());
    }

    #[test]
    fn test_serde_as_components() {
        let isrc = Isrc::parse("GB-BBB-99-05305").unwrap();
        let json = serde_json::to_string(&isrc).unwrap();
        assert_eq!(json, r#"{"owner":"GBBBB","year":99,"designation":5305}"#);

        let back: Isrc = serde_json::from_str(&json).unwrap();
        assert_eq!(back, isrc);
        assert!(back.raw().is_none());
    }

    #[test]
    fn test_serde_round_trips_unvalidated_values() {
        for isrc in [
            Isrc::new("QX123", 45, 67890),
            Isrc::new("zzzzz", 12, 34567),
            Isrc::new("ZZZZZ", 200, 123_456),
        ] {
            let json = serde_json::to_string(&isrc).unwrap();
            let back: Isrc = serde_json::from_str(&json).unwrap();
            assert_eq!(back, isrc, "{json}");
            assert_eq!(back.year(), isrc.year());
            assert_eq!(back.designation(), isrc.designation());
        }
    }
}
