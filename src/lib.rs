#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # iso3901: ISRC parsing for Rust
//!
//! Structured parsing and validation of International Standard Recording
//! Codes, together with the table of two-letter prefixes and the agencies and
//! territories they are allocated to.
//!
//! ## Quick Start
//!
//! ```
//! use iso3901::{Agency, Isrc};
//!
//! let isrc = Isrc::parse("USDO19800058")?;
//! assert_eq!(isrc.prefix(), "US");
//! assert_eq!(isrc.agency(), Some(Agency::Riaa));
//! assert_eq!(isrc.stringify(true), "US-DO1-98-00058");
//! assert!(!isrc.retired());
//!
//! assert!(Isrc::validate("isrc us-do1-98-00058"));
//! assert!(!Isrc::validate("US-DO1-98?00058"));
//! # Ok::<(), iso3901::IsrcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`isrc`] — The [`Isrc`] value object
//! - [`parser`] — Segmentation and validation of raw text
//! - [`allocation`] — Prefix allocation table
//! - [`agency`] — Allocating agencies
//! - [`country`] — Country records and the country registry seam
//! - [`error`] — Error types and result type

pub mod agency;
pub mod allocation;
pub mod country;
pub mod error;
pub mod isrc;
pub mod parser;

pub use agency::Agency;
pub use allocation::{Allocation, AllocationEntry, AllocationTable};
pub use country::{BuiltinCountries, CountryRecord, CountryRegistry};
pub use error::{ErrorKind, IsrcError, Result};
pub use isrc::Isrc;
pub use parser::Segment;
