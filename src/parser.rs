//! Segmentation and validation of raw ISRC strings.
//!
//! An ISRC is written either compactly (`CCOOOYYNNNNN`) or with hyphens
//! between its four segments (`CC-OOO-YY-NNNNN`), optionally preceded by the
//! literal `ISRC `. Text after the consumed characters is ignored.
//!
//! # Structure
//!
//! - Country code: 2 ASCII letters, must be an allocated prefix
//! - Registrant code: 3 ASCII letters or digits
//! - Year of reference: 2 ASCII digits
//! - Designation code: 5 ASCII digits
//!
//! All widths are counted in characters, not bytes, so that non-ASCII input
//! reaches the character-class check instead of being split mid-character.

use crate::allocation::Allocation;
use crate::error::{IsrcError, Result};
use std::fmt;

/// Literal that may precede an ISRC in running text.
pub const LABEL: &str = "ISRC ";

/// Characters of the hyphenated form, separators included.
pub const HYPHENATED_LEN: usize = 15;

/// Characters of the compact form.
pub const COMPACT_LEN: usize = 12;

/// The four fixed-width segments of an ISRC, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Country code / prefix (2 letters)
    Country,
    /// Registrant code (3 alphanumerics)
    Owner,
    /// Year of reference (2 digits)
    Year,
    /// Designation code (5 digits)
    Designation,
}

impl Segment {
    /// All segments in the order they appear in an ISRC.
    pub const ALL: [Segment; 4] = [
        Segment::Country,
        Segment::Owner,
        Segment::Year,
        Segment::Designation,
    ];

    /// Required number of characters.
    #[must_use]
    pub fn expected_len(self) -> usize {
        match self {
            Segment::Country | Segment::Year => 2,
            Segment::Owner => 3,
            Segment::Designation => 5,
        }
    }

    /// Whether every character of `value` belongs to this segment's class.
    ///
    /// Only ASCII characters can pass. An empty value never passes.
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        let class: fn(&u8) -> bool = match self {
            Segment::Country => u8::is_ascii_alphabetic,
            Segment::Owner => u8::is_ascii_alphanumeric,
            Segment::Year | Segment::Designation => u8::is_ascii_digit,
        };
        !value.is_empty() && value.is_ascii() && value.as_bytes().iter().all(class)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Segment::Country => "country code",
            Segment::Owner => "registrant code",
            Segment::Year => "year of reference",
            Segment::Designation => "designation code",
        })
    }
}

/// Validated segments of a parsed ISRC, already uppercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSegments {
    /// Country code, an allocated prefix
    pub country: String,
    /// Registrant code
    pub owner: String,
    /// Year of reference
    pub year: u8,
    /// Designation code
    pub designation: u32,
}

impl RawSegments {
    /// Full five-character owner code (prefix followed by registrant code).
    #[must_use]
    pub fn owner_code(&self) -> String {
        format!("{}{}", self.country, self.owner)
    }
}

/// Byte offset of the `n`-th character of `s`, or `s.len()` if `s` is shorter.
fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(idx, _)| idx)
}

/// Substring covering characters `start..end`, clamped to the end of `s`.
fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let from = char_offset(s, start);
    let to = char_offset(s, end);
    &s[from..to]
}

/// Split canonicalized text into its four candidate segments.
fn split_segments(canon: &str) -> Result<[&str; 4]> {
    let head = char_slice(canon, 0, HYPHENATED_LEN);
    if head.contains('-') {
        let parts: Vec<&str> = head.split('-').collect();
        match parts.as_slice() {
            [country, owner, year, designation] => Ok([*country, *owner, *year, *designation]),
            _ => Err(IsrcError::WrongSegmentCount { found: parts.len() }),
        }
    } else {
        Ok([
            char_slice(canon, 0, 2),
            char_slice(canon, 2, 5),
            char_slice(canon, 5, 7),
            char_slice(canon, 7, COMPACT_LEN),
        ])
    }
}

/// Check widths of all segments, then classes of all segments.
///
/// A segment that is both too long and badly formed reports its length.
fn check_segments(segments: &[&str; 4]) -> Result<()> {
    for (segment, value) in Segment::ALL.iter().zip(segments) {
        if value.chars().count() != segment.expected_len() {
            return Err(IsrcError::WrongLength {
                segment: *segment,
                value: (*value).to_string(),
                expected: segment.expected_len(),
            });
        }
    }
    for (segment, value) in Segment::ALL.iter().zip(segments) {
        if !segment.accepts(value) {
            return Err(IsrcError::InvalidCharacterClass {
                segment: *segment,
                value: (*value).to_string(),
            });
        }
    }
    Ok(())
}

/// Parse and validate raw ISRC text into its segments.
///
/// The input is uppercased (ASCII only), stripped of a leading `ISRC `
/// label, split into segments, checked, and finally its prefix is looked up
/// in the allocation table. Retired prefixes are accepted.
///
/// # Errors
///
/// Returns [`IsrcError::WrongSegmentCount`], [`IsrcError::WrongLength`],
/// [`IsrcError::InvalidCharacterClass`] or [`IsrcError::UnknownPrefix`].
///
/// # Examples
///
/// ```
/// use iso3901::parser::parse_segments;
///
/// let segments = parse_segments("ISRC us-s1z-99-00001").unwrap();
/// assert_eq!(segments.owner_code(), "USS1Z");
/// assert_eq!(segments.year, 99);
/// assert_eq!(segments.designation, 1);
/// ```
pub fn parse_segments(raw: &str) -> Result<RawSegments> {
    let upper = raw.to_ascii_uppercase();
    let canon = upper.strip_prefix(LABEL).unwrap_or(&upper);

    let segments = split_segments(canon).and_then(|segments| {
        check_segments(&segments)?;
        Ok(segments)
    });
    let [country, owner, year, designation] = match segments {
        Ok(segments) => segments,
        Err(err) => {
            tracing::debug!(input = raw, error = %err, "rejected malformed ISRC");
            return Err(err);
        },
    };

    if Allocation::lookup(country).is_none() {
        tracing::debug!(input = raw, prefix = country, "rejected unallocated ISRC prefix");
        return Err(IsrcError::UnknownPrefix(country.to_string()));
    }

    // Both are at most five ASCII digits after `check_segments`.
    let year = year.parse::<u8>().unwrap_or_default();
    let designation = designation.parse::<u32>().unwrap_or_default();

    Ok(RawSegments {
        country: country.to_string(),
        owner: owner.to_string(),
        year,
        designation,
    })
}
