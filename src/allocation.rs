//! ISRC prefix allocation table.
//!
//! Maps every two-letter prefix ever allocated to the agency that manages it
//! and the territory it stands for. Prefixes of territories that ceased to
//! exist or were absorbed elsewhere stay in the table, flagged as retired.
//!
//! The process-wide table is built once, on first access, and is read-only
//! afterwards. Use [`Allocation`] to query it.
//!
//! # Known ambiguity
//!
//! In ISO 3166 `TC` is Turks and Caicos Islands, but the IIRA allocated the
//! `TC` prefix to TuneCore Inc. and moved Turks and Caicos Islands under one
//! of its reserved prefixes (`DG`). The table keeps `TC` as a worldwide
//! allocation.

use crate::agency::Agency;
use crate::country::{
    BuiltinCountries, CountryRecord, CountryRegistry, SERBIA_AND_MONTENEGRO, WORLDWIDE, YUGOSLAVIA,
};
use crate::error::Result;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use serde::Serialize;

/// Territory column of the literal table, resolved at build time.
#[derive(Debug, Clone, Copy)]
enum Territory {
    /// ISO 3166-1 alpha-2 code, resolved through a [`CountryRegistry`]
    Iso(&'static str),
    /// Pseudo-entity absent from ISO 3166
    Pseudo(CountryRecord),
}

use Territory::{Iso, Pseudo};

/// One row of the allocation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AllocationEntry {
    /// Two uppercase ASCII letters
    pub prefix: &'static str,
    /// Agency allocating registrant codes under this prefix
    pub agency: Agency,
    /// Territory (or pseudo-entity) the prefix stands for
    pub country: CountryRecord,
    /// Whether the prefix belongs to a territory that no longer uses it
    pub retired: bool,
}

#[rustfmt::skip]
static PREFIX_TABLE: &[(&str, Agency, Territory, bool)] = &[
    // IIRA reserved
    ("CP", Agency::Iira,     Pseudo(WORLDWIDE), false),
    ("DG", Agency::Iira,     Pseudo(WORLDWIDE), false),
    ("ZZ", Agency::Iira,     Pseudo(WORLDWIDE), false),
    ("TC", Agency::TuneCore, Pseudo(WORLDWIDE), false),

    // Brazil
    ("BC", Agency::ProMusicaBrazil, Iso("BR"), false),
    ("BK", Agency::ProMusicaBrazil, Iso("BR"), false),
    ("BP", Agency::ProMusicaBrazil, Iso("BR"), false),
    ("BR", Agency::ProMusicaBrazil, Iso("BR"), false),
    ("BX", Agency::ProMusicaBrazil, Iso("BR"), false),

    // Denmark
    ("DK", Agency::GramexDk, Iso("DK"), false),
    ("FO", Agency::GramexDk, Iso("DK"), false),
    ("GL", Agency::GramexDk, Iso("DK"), false),

    // United Kingdom
    ("GB", Agency::PplUk, Iso("GB"), false),
    ("GX", Agency::PplUk, Iso("GB"), false),
    ("UK", Agency::PplUk, Iso("GB"), false),

    // United States
    ("QM", Agency::Riaa, Iso("US"), false),
    ("QZ", Agency::Riaa, Iso("US"), false),
    ("US", Agency::Riaa, Iso("US"), false),

    // Canada
    ("CA", Agency::Connect, Iso("CA"), false),
    ("CB", Agency::Connect, Iso("CA"), false),

    // France
    ("FR", Agency::Scpp, Iso("FR"), false),
    ("FX", Agency::Scpp, Iso("FR"), false),

    // South Africa
    ("ZA", Agency::Risa, Iso("ZA"), false),
    ("ZB", Agency::Risa, Iso("ZA"), false),

    // South Korea
    ("KR", Agency::Kmca, Iso("KR"), false),
    ("KS", Agency::Kmca, Iso("KR"), false),

    // Belgium, Luxembourg
    ("BE", Agency::Simim, Iso("BE"), false),
    ("LU", Agency::Simim, Iso("LU"), false),

    // New Zealand, Fiji, Tonga
    ("FJ", Agency::RecordedMusicNz, Iso("FJ"), false),
    ("NZ", Agency::RecordedMusicNz, Iso("NZ"), false),
    ("TO", Agency::RecordedMusicNz, Iso("TO"), false),

    // Switzerland, Liechtenstein
    ("CH", Agency::IfpiSwitzerland, Iso("CH"), false),
    ("LI", Agency::IfpiSwitzerland, Iso("LI"), false),

    // Retired: Puerto Rico is now managed under US
    ("PR", Agency::Iira, Iso("PR"),                     true),
    ("CS", Agency::Iira, Pseudo(SERBIA_AND_MONTENEGRO), true),
    ("YU", Agency::Iira, Pseudo(YUGOSLAVIA),            true),

    // One prefix per territory
    ("AD", Agency::Iira,                   Iso("AD"), false),
    ("AE", Agency::Iira,                   Iso("AE"), false),
    ("AG", Agency::Iira,                   Iso("AG"), false),
    ("AI", Agency::Iira,                   Iso("AI"), false),
    ("AL", Agency::Iira,                   Iso("AL"), false),
    ("AM", Agency::Iira,                   Iso("AM"), false),
    ("AO", Agency::Iira,                   Iso("AO"), false),
    ("AR", Agency::Capif,                  Iso("AR"), false),
    ("AT", Agency::Lsg,                    Iso("AT"), false),
    ("AU", Agency::Aria,                   Iso("AU"), false),
    ("AW", Agency::Iira,                   Iso("AW"), false),
    ("AZ", Agency::Iira,                   Iso("AZ"), false),
    ("BA", Agency::Iira,                   Iso("BA"), false),
    ("BB", Agency::Coscap,                 Iso("BB"), false),
    ("BD", Agency::Iira,                   Iso("BD"), false),
    ("BF", Agency::Iira,                   Iso("BF"), false),
    ("BG", Agency::Iira,                   Iso("BG"), false),
    ("BH", Agency::Iira,                   Iso("BH"), false),
    ("BM", Agency::Iira,                   Iso("BM"), false),
    ("BO", Agency::Iira,                   Iso("BO"), false),
    ("BS", Agency::Iira,                   Iso("BS"), false),
    ("BY", Agency::Iira,                   Iso("BY"), false),
    ("BZ", Agency::Iira,                   Iso("BZ"), false),
    ("CD", Agency::Iira,                   Iso("CD"), false),
    ("CI", Agency::Iira,                   Iso("CI"), false),
    ("CL", Agency::IfpiChile,              Iso("CL"), false),
    ("CM", Agency::Iira,                   Iso("CM"), false),
    ("CN", Agency::Iira,                   Iso("CN"), false),
    ("CO", Agency::Iira,                   Iso("CO"), false),
    ("CU", Agency::Iira,                   Iso("CU"), false),
    ("CW", Agency::Iira,                   Iso("CW"), false),
    ("CY", Agency::Iira,                   Iso("CY"), false),
    ("CZ", Agency::Intergram,              Iso("CZ"), false),
    ("DE", Agency::Bvmi,                   Iso("DE"), false),
    ("DM", Agency::Iira,                   Iso("DM"), false),
    ("DO", Agency::Sodinpro,               Iso("DO"), false),
    ("DZ", Agency::Iira,                   Iso("DZ"), false),
    ("EC", Agency::Iira,                   Iso("EC"), false),
    ("EE", Agency::Efu,                    Iso("EE"), false),
    ("EG", Agency::Iira,                   Iso("EG"), false),
    ("ES", Agency::Agedi,                  Iso("ES"), false),
    ("ET", Agency::Iira,                   Iso("ET"), false),
    ("FI", Agency::IfpiFinland,            Iso("FI"), false),
    ("GD", Agency::Iira,                   Iso("GD"), false),
    ("GE", Agency::Iira,                   Iso("GE"), false),
    ("GG", Agency::Iira,                   Iso("GG"), false),
    ("GH", Agency::Iira,                   Iso("GH"), false),
    ("GI", Agency::Iira,                   Iso("GI"), false),
    ("GM", Agency::Iira,                   Iso("GM"), false),
    ("GR", Agency::IfpiGreece,             Iso("GR"), false),
    ("GT", Agency::Iira,                   Iso("GT"), false),
    ("GY", Agency::Iira,                   Iso("GY"), false),
    ("HK", Agency::IfpiHongKong,           Iso("HK"), false),
    ("HN", Agency::Iira,                   Iso("HN"), false),
    ("HR", Agency::Iira,                   Iso("HR"), false),
    ("HT", Agency::Iira,                   Iso("HT"), false),
    ("HU", Agency::Iira,                   Iso("HU"), false),
    ("ID", Agency::Asiri,                  Iso("ID"), false),
    ("IE", Agency::Ppi,                    Iso("IE"), false),
    ("IL", Agency::IfpiIsrael,             Iso("IL"), false),
    ("IN", Agency::Imi,                    Iso("IN"), false),
    ("IQ", Agency::Iira,                   Iso("IQ"), false),
    ("IR", Agency::Iira,                   Iso("IR"), false),
    ("IS", Agency::Sfh,                    Iso("IS"), false),
    ("IT", Agency::Fimi,                   Iso("IT"), false),
    ("JE", Agency::Iira,                   Iso("JE"), false),
    ("JM", Agency::Jamms,                  Iso("JM"), false),
    ("JO", Agency::Iira,                   Iso("JO"), false),
    ("JP", Agency::Riaj,                   Iso("JP"), false),
    ("KE", Agency::Iira,                   Iso("KE"), false),
    ("KN", Agency::Iira,                   Iso("KN"), false),
    ("KY", Agency::Iira,                   Iso("KY"), false),
    ("KZ", Agency::Iira,                   Iso("KZ"), false),
    ("LA", Agency::Iira,                   Iso("LA"), false),
    ("LB", Agency::Iira,                   Iso("LB"), false),
    ("LC", Agency::Iira,                   Iso("LC"), false),
    ("LK", Agency::Iira,                   Iso("LK"), false),
    ("LS", Agency::Iira,                   Iso("LS"), false),
    ("LT", Agency::Agata,                  Iso("LT"), false),
    ("LV", Agency::Laipa,                  Iso("LV"), false),
    ("MA", Agency::Iira,                   Iso("MA"), false),
    ("MC", Agency::Iira,                   Iso("MC"), false),
    ("MD", Agency::Iira,                   Iso("MD"), false),
    ("ME", Agency::Iira,                   Iso("ME"), false),
    ("MK", Agency::Iira,                   Iso("MK"), false),
    ("MO", Agency::Iira,                   Iso("MO"), false),
    ("MP", Agency::Iira,                   Iso("MP"), false),
    ("MS", Agency::Iira,                   Iso("MS"), false),
    ("MT", Agency::Iira,                   Iso("MT"), false),
    ("MU", Agency::Iira,                   Iso("MU"), false),
    ("MV", Agency::Iira,                   Iso("MV"), false),
    ("MW", Agency::Iira,                   Iso("MW"), false),
    ("MX", Agency::Amprofon,               Iso("MX"), false),
    ("MY", Agency::Rim,                    Iso("MY"), false),
    ("MZ", Agency::Iira,                   Iso("MZ"), false),
    ("NA", Agency::Iira,                   Iso("NA"), false),
    ("NG", Agency::Iira,                   Iso("NG"), false),
    ("NL", Agency::Sena,                   Iso("NL"), false),
    ("NO", Agency::Gramo,                  Iso("NO"), false),
    ("NP", Agency::Iira,                   Iso("NP"), false),
    ("PA", Agency::Produce,                Iso("PA"), false),
    ("PE", Agency::Unimpro,                Iso("PE"), false),
    ("PF", Agency::Iira,                   Iso("PF"), false),
    ("PG", Agency::Iira,                   Iso("PG"), false),
    ("PH", Agency::Pari,                   Iso("PH"), false),
    ("PK", Agency::Iira,                   Iso("PK"), false),
    ("PL", Agency::Zpav,                   Iso("PL"), false),
    ("PT", Agency::Afp,                    Iso("PT"), false),
    ("PY", Agency::Sgp,                    Iso("PY"), false),
    ("QA", Agency::Iira,                   Iso("QA"), false),
    ("RO", Agency::Upfr,                   Iso("RO"), false),
    ("RS", Agency::Iira,                   Iso("RS"), false),
    ("RU", Agency::Iira,                   Iso("RU"), false),
    ("SA", Agency::Iira,                   Iso("SA"), false),
    ("SB", Agency::Iira,                   Iso("SB"), false),
    ("SC", Agency::Iira,                   Iso("SC"), false),
    ("SE", Agency::IfpiSweden,             Iso("SE"), false),
    ("SG", Agency::Rias,                   Iso("SG"), false),
    ("SI", Agency::Iira,                   Iso("SI"), false),
    ("SK", Agency::Slovgram,               Iso("SK"), false),
    ("SL", Agency::Iira,                   Iso("SL"), false),
    ("SM", Agency::Iira,                   Iso("SM"), false),
    ("SN", Agency::Iira,                   Iso("SN"), false),
    ("SV", Agency::Iira,                   Iso("SV"), false),
    ("SX", Agency::Iira,                   Iso("SX"), false),
    ("SZ", Agency::Iira,                   Iso("SZ"), false),
    ("TH", Agency::Teca,                   Iso("TH"), false),
    ("TN", Agency::Iira,                   Iso("TN"), false),
    ("TR", Agency::MuYap,                  Iso("TR"), false),
    ("TT", Agency::Cott,                   Iso("TT"), false),
    ("TW", Agency::Rit,                    Iso("TW"), false),
    ("TZ", Agency::Iira,                   Iso("TZ"), false),
    ("UA", Agency::UkrainianMusicAlliance, Iso("UA"), false),
    ("UG", Agency::Iira,                   Iso("UG"), false),
    ("UY", Agency::CamaraUruguayaDelDisco, Iso("UY"), false),
    ("UZ", Agency::Iira,                   Iso("UZ"), false),
    ("VC", Agency::Iira,                   Iso("VC"), false),
    ("VE", Agency::Iira,                   Iso("VE"), false),
    ("VG", Agency::Iira,                   Iso("VG"), false),
    ("VN", Agency::Iira,                   Iso("VN"), false),
    ("VU", Agency::Iira,                   Iso("VU"), false),
    ("XK", Agency::Iira,                   Iso("XK"), false),
    ("ZM", Agency::Iira,                   Iso("ZM"), false),
    ("ZW", Agency::Iira,                   Iso("ZW"), false),
];

/// Insertion-ordered map from prefix to [`AllocationEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationTable {
    entries: IndexMap<&'static str, AllocationEntry>,
}

impl AllocationTable {
    /// Build the table from the literal prefix data, resolving ISO 3166
    /// territories through `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`IsrcError::CountryNotFound`](crate::IsrcError::CountryNotFound)
    /// if the registry cannot resolve a territory named by the table.
    pub fn from_registry<R: CountryRegistry + ?Sized>(registry: &R) -> Result<Self> {
        let mut entries = IndexMap::with_capacity(PREFIX_TABLE.len());
        for &(prefix, agency, territory, retired) in PREFIX_TABLE {
            let country = match territory {
                Iso(code) => *registry.by_alpha2(code)?,
                Pseudo(record) => record,
            };
            entries.insert(
                prefix,
                AllocationEntry {
                    prefix,
                    agency,
                    country,
                    retired,
                },
            );
        }
        tracing::trace!(prefixes = entries.len(), "built ISRC allocation table");
        Ok(AllocationTable { entries })
    }

    /// Look up an entry by prefix.
    ///
    /// Matching is exact: `prefix` must already be two uppercase letters.
    #[must_use]
    pub fn lookup(&self, prefix: &str) -> Option<&AllocationEntry> {
        self.entries.get(prefix)
    }

    /// All entries, in table order.
    pub fn all(&self) -> impl Iterator<Item = &AllocationEntry> + '_ {
        self.entries.values()
    }

    /// Entries whose prefixes are allocated by `agency`.
    pub fn by_agency(&self, agency: Agency) -> impl Iterator<Item = &AllocationEntry> + '_ {
        self.all().filter(move |entry| entry.agency == agency)
    }

    /// Entries whose territory has the given alpha-2 code.
    pub fn by_country<'a>(&'a self, alpha2: &'a str) -> impl Iterator<Item = &'a AllocationEntry> {
        self.all().filter(move |entry| entry.country.alpha2 == alpha2)
    }

    /// Number of prefixes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

lazy_static! {
    static ref ALLOCATIONS: AllocationTable = AllocationTable::from_registry(&BuiltinCountries)
        .expect("ISRC allocation table names a territory missing from the built-in registry");
}

/// Read-only access to the process-wide allocation table.
///
/// # Examples
///
/// ```
/// use iso3901::{Agency, Allocation};
///
/// let entry = Allocation::lookup("NL").unwrap();
/// assert_eq!(entry.agency, Agency::Sena);
/// assert_eq!(entry.country.name, "Netherlands");
/// assert!(!entry.retired);
///
/// assert!(Allocation::lookup("QX").is_none());
/// assert!(Allocation::lookup("nl").is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Allocation;

impl Allocation {
    /// The process-wide table.
    #[must_use]
    pub fn table() -> &'static AllocationTable {
        &ALLOCATIONS
    }

    /// Look up an entry by prefix (exact, case-sensitive match).
    #[must_use]
    pub fn lookup(prefix: &str) -> Option<&'static AllocationEntry> {
        Self::table().lookup(prefix)
    }

    /// All entries, in table order. Each call starts a fresh traversal.
    pub fn all() -> impl Iterator<Item = &'static AllocationEntry> {
        Self::table().all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IsrcError;

    #[test]
    fn test_every_literal_row_is_present() {
        assert_eq!(Allocation::table().len(), PREFIX_TABLE.len());
        assert!(!Allocation::table().is_empty());
    }

    #[test]
    fn test_keys_are_two_uppercase_letters() {
        for entry in Allocation::all() {
            assert_eq!(entry.prefix.len(), 2);
            assert!(entry.prefix.bytes().all(|b| b.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_order_follows_table() {
        let first: Vec<_> = Allocation::all().take(4).map(|e| e.prefix).collect();
        assert_eq!(first, ["CP", "DG", "ZZ", "TC"]);
        let again: Vec<_> = Allocation::all().take(4).map(|e| e.prefix).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_retired_prefixes() {
        let retired: Vec<_> = Allocation::all()
            .filter(|e| e.retired)
            .map(|e| e.prefix)
            .collect();
        assert_eq!(retired, ["PR", "CS", "YU"]);
        assert_eq!(Allocation::lookup("YU").unwrap().country, YUGOSLAVIA);
    }

    #[test]
    fn test_tc_stays_worldwide() {
        let entry = Allocation::lookup("TC").unwrap();
        assert_eq!(entry.agency, Agency::TuneCore);
        assert_eq!(entry.country, WORLDWIDE);
    }

    #[test]
    fn test_reverse_queries() {
        let brazil: Vec<_> = Allocation::table()
            .by_country("BR")
            .map(|e| e.prefix)
            .collect();
        assert_eq!(brazil, ["BC", "BK", "BP", "BR", "BX"]);

        let nz: Vec<_> = Allocation::table()
            .by_agency(Agency::RecordedMusicNz)
            .map(|e| e.prefix)
            .collect();
        assert_eq!(nz, ["FJ", "NZ", "TO"]);
    }

    struct EmptyRegistry;

    impl CountryRegistry for EmptyRegistry {
        fn by_alpha2(&self, code: &str) -> Result<&CountryRecord> {
            Err(IsrcError::CountryNotFound(code.to_string()))
        }
    }

    #[test]
    fn test_unresolvable_registry_fails() {
        assert_eq!(
            AllocationTable::from_registry(&EmptyRegistry),
            Err(IsrcError::CountryNotFound("BR".to_string()))
        );
    }
}
