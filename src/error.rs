//! Error types for ISRC operations.
//!
//! This module provides the [`IsrcError`] type for all library operations
//! and the [`Result`] convenience type.

use crate::parser::Segment;
use thiserror::Error;

/// Error type for all ISRC library operations.
///
/// Every variant is terminal: the same input always fails the same way,
/// since parsing is a pure function of the input and the constant
/// allocation table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsrcError {
    /// The value handed to the parser was not a string.
    ///
    /// Unreachable from Rust callers; raised by dynamically typed bindings.
    #[error("Argument must be a string")]
    InvalidType,

    /// Hyphenated input did not split into exactly four segments.
    #[error("Expected 4 hyphen-separated segments, found {found}")]
    WrongSegmentCount {
        /// Number of segments produced by the split
        found: usize,
    },

    /// A segment does not have its fixed width.
    #[error("Wrong length for segment \"{value}\", expected {expected} characters")]
    WrongLength {
        /// Which of the four segments failed
        segment: Segment,
        /// The offending segment content
        value: String,
        /// Required number of characters
        expected: usize,
    },

    /// A segment has the right width but contains characters outside its class.
    #[error("Unexpected character found for segment \"{value}\"")]
    InvalidCharacterClass {
        /// Which of the four segments failed
        segment: Segment,
        /// The offending segment content
        value: String,
    },

    /// The country segment is well formed but not an allocated prefix.
    #[error("First segment \"{0}\" is not a known ISRC prefix")]
    UnknownPrefix(String),

    /// The country registry has no record for an alpha-2 code.
    #[error("No country record for alpha-2 code \"{0}\"")]
    CountryNotFound(String),
}

/// Discriminant of an [`IsrcError`], for callers that branch on the failure
/// class without inspecting the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`IsrcError::InvalidType`]
    InvalidType,
    /// See [`IsrcError::WrongSegmentCount`]
    WrongSegmentCount,
    /// See [`IsrcError::WrongLength`]
    WrongLength,
    /// See [`IsrcError::InvalidCharacterClass`]
    InvalidCharacterClass,
    /// See [`IsrcError::UnknownPrefix`]
    UnknownPrefix,
    /// See [`IsrcError::CountryNotFound`]
    CountryNotFound,
}

impl IsrcError {
    /// The failure class of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            IsrcError::InvalidType => ErrorKind::InvalidType,
            IsrcError::WrongSegmentCount { .. } => ErrorKind::WrongSegmentCount,
            IsrcError::WrongLength { .. } => ErrorKind::WrongLength,
            IsrcError::InvalidCharacterClass { .. } => ErrorKind::InvalidCharacterClass,
            IsrcError::UnknownPrefix(_) => ErrorKind::UnknownPrefix,
            IsrcError::CountryNotFound(_) => ErrorKind::CountryNotFound,
        }
    }

    /// The segment that failed validation, if the error concerns one.
    #[must_use]
    pub fn segment(&self) -> Option<Segment> {
        match self {
            IsrcError::WrongLength { segment, .. }
            | IsrcError::InvalidCharacterClass { segment, .. } => Some(*segment),
            IsrcError::UnknownPrefix(_) => Some(Segment::Country),
            _ => None,
        }
    }
}

/// Convenience type alias for [`std::result::Result`] with [`IsrcError`].
pub type Result<T> = std::result::Result<T, IsrcError>;
