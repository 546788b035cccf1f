//! Country and territory records referenced by ISRC prefixes.
//!
//! Most prefixes correspond to an ISO 3166-1 territory. A few do not: some
//! are allocated worldwide, and some belong to states that no longer exist
//! and are therefore absent from current ISO 3166 data. Both cases are
//! represented by pseudo records sharing the same shape as real ones.
//!
//! Real records are obtained through a [`CountryRegistry`]. The allocation
//! table consults the registry once while it is built, so the registry is
//! never queried per lookup.

use crate::error::{IsrcError, Result};
use serde::Serialize;
use std::fmt;

/// A country, territory, or pseudo-entity attached to an ISRC prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CountryRecord {
    /// English short name
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 code (empty for worldwide allocations)
    pub alpha2: &'static str,
    /// ISO 3166-1 alpha-3 code (empty for worldwide allocations)
    pub alpha3: &'static str,
    /// ISO 3166-1 numeric code, zero padded (empty for worldwide allocations)
    pub numeric: &'static str,
}

impl CountryRecord {
    /// Build a record from its four fields.
    #[must_use]
    pub const fn new(
        name: &'static str,
        alpha2: &'static str,
        alpha3: &'static str,
        numeric: &'static str,
    ) -> Self {
        CountryRecord {
            name,
            alpha2,
            alpha3,
            numeric,
        }
    }

    /// Whether this record is one of the pseudo-entities rather than a
    /// current ISO 3166-1 territory.
    #[must_use]
    pub fn is_pseudo(&self) -> bool {
        PSEUDO_COUNTRIES.iter().any(|pseudo| pseudo == self)
    }
}

impl fmt::Display for CountryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Placeholder for prefixes not tied to any single territory.
pub const WORLDWIDE: CountryRecord = CountryRecord::new("Worldwide", "", "", "");

/// Prefix allocated to producers in Yugoslavia (before 2003).
pub const YUGOSLAVIA: CountryRecord = CountryRecord::new("Yugoslavia", "YU", "YUG", "891");

/// Prefix allocated to producers in Serbia and Montenegro (before 2006).
pub const SERBIA_AND_MONTENEGRO: CountryRecord =
    CountryRecord::new("Serbia and Montenegro", "CS", "SCG", "891");

/// All pseudo-entities known to the library.
pub const PSEUDO_COUNTRIES: [CountryRecord; 3] = [WORLDWIDE, YUGOSLAVIA, SERBIA_AND_MONTENEGRO];

/// Lookup service resolving ISO 3166-1 alpha-2 codes to country records.
///
/// Implement this to plug a different country database into
/// [`AllocationTable::from_registry`](crate::allocation::AllocationTable::from_registry).
pub trait CountryRegistry {
    /// Resolve an alpha-2 code.
    ///
    /// # Errors
    ///
    /// Returns [`IsrcError::CountryNotFound`] if the code is unknown.
    fn by_alpha2(&self, code: &str) -> Result<&CountryRecord>;
}

/// Built-in ISO 3166-1 registry.
///
/// Covers every territory that appears in the ISRC allocation table. Matching
/// is exact on the uppercase alpha-2 code.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCountries;

impl BuiltinCountries {
    /// All records, sorted by alpha-2 code.
    #[must_use]
    pub fn records() -> &'static [CountryRecord] {
        ISO_3166_RECORDS
    }
}

impl CountryRegistry for BuiltinCountries {
    fn by_alpha2(&self, code: &str) -> Result<&CountryRecord> {
        ISO_3166_RECORDS
            .binary_search_by(|record| record.alpha2.cmp(code))
            .map(|idx| &ISO_3166_RECORDS[idx])
            .map_err(|_| IsrcError::CountryNotFound(code.to_string()))
    }
}

/// Sorted for binary search.
static ISO_3166_RECORDS: &[CountryRecord] = &[
    CountryRecord::new("Andorra", "AD", "AND", "020"),
    CountryRecord::new("United Arab Emirates", "AE", "ARE", "784"),
    CountryRecord::new("Antigua and Barbuda", "AG", "ATG", "028"),
    CountryRecord::new("Anguilla", "AI", "AIA", "660"),
    CountryRecord::new("Albania", "AL", "ALB", "008"),
    CountryRecord::new("Armenia", "AM", "ARM", "051"),
    CountryRecord::new("Angola", "AO", "AGO", "024"),
    CountryRecord::new("Argentina", "AR", "ARG", "032"),
    CountryRecord::new("Austria", "AT", "AUT", "040"),
    CountryRecord::new("Australia", "AU", "AUS", "036"),
    CountryRecord::new("Aruba", "AW", "ABW", "533"),
    CountryRecord::new("Azerbaijan", "AZ", "AZE", "031"),
    CountryRecord::new("Bosnia and Herzegovina", "BA", "BIH", "070"),
    CountryRecord::new("Barbados", "BB", "BRB", "052"),
    CountryRecord::new("Bangladesh", "BD", "BGD", "050"),
    CountryRecord::new("Belgium", "BE", "BEL", "056"),
    CountryRecord::new("Burkina Faso", "BF", "BFA", "854"),
    CountryRecord::new("Bulgaria", "BG", "BGR", "100"),
    CountryRecord::new("Bahrain", "BH", "BHR", "048"),
    CountryRecord::new("Bermuda", "BM", "BMU", "060"),
    CountryRecord::new("Bolivia, Plurinational State of", "BO", "BOL", "068"),
    CountryRecord::new("Brazil", "BR", "BRA", "076"),
    CountryRecord::new("Bahamas", "BS", "BHS", "044"),
    CountryRecord::new("Belarus", "BY", "BLR", "112"),
    CountryRecord::new("Belize", "BZ", "BLZ", "084"),
    CountryRecord::new("Canada", "CA", "CAN", "124"),
    CountryRecord::new("Congo, Democratic Republic of the", "CD", "COD", "180"),
    CountryRecord::new("Switzerland", "CH", "CHE", "756"),
    CountryRecord::new("Côte d'Ivoire", "CI", "CIV", "384"),
    CountryRecord::new("Chile", "CL", "CHL", "152"),
    CountryRecord::new("Cameroon", "CM", "CMR", "120"),
    CountryRecord::new("China", "CN", "CHN", "156"),
    CountryRecord::new("Colombia", "CO", "COL", "170"),
    CountryRecord::new("Cuba", "CU", "CUB", "192"),
    CountryRecord::new("Curaçao", "CW", "CUW", "531"),
    CountryRecord::new("Cyprus", "CY", "CYP", "196"),
    CountryRecord::new("Czechia", "CZ", "CZE", "203"),
    CountryRecord::new("Germany", "DE", "DEU", "276"),
    CountryRecord::new("Denmark", "DK", "DNK", "208"),
    CountryRecord::new("Dominica", "DM", "DMA", "212"),
    CountryRecord::new("Dominican Republic", "DO", "DOM", "214"),
    CountryRecord::new("Algeria", "DZ", "DZA", "012"),
    CountryRecord::new("Ecuador", "EC", "ECU", "218"),
    CountryRecord::new("Estonia", "EE", "EST", "233"),
    CountryRecord::new("Egypt", "EG", "EGY", "818"),
    CountryRecord::new("Spain", "ES", "ESP", "724"),
    CountryRecord::new("Ethiopia", "ET", "ETH", "231"),
    CountryRecord::new("Finland", "FI", "FIN", "246"),
    CountryRecord::new("Fiji", "FJ", "FJI", "242"),
    CountryRecord::new("France", "FR", "FRA", "250"),
    CountryRecord::new(
        "United Kingdom of Great Britain and Northern Ireland",
        "GB",
        "GBR",
        "826",
    ),
    CountryRecord::new("Grenada", "GD", "GRD", "308"),
    CountryRecord::new("Georgia", "GE", "GEO", "268"),
    CountryRecord::new("Guernsey", "GG", "GGY", "831"),
    CountryRecord::new("Ghana", "GH", "GHA", "288"),
    CountryRecord::new("Gibraltar", "GI", "GIB", "292"),
    CountryRecord::new("Gambia", "GM", "GMB", "270"),
    CountryRecord::new("Greece", "GR", "GRC", "300"),
    CountryRecord::new("Guatemala", "GT", "GTM", "320"),
    CountryRecord::new("Guyana", "GY", "GUY", "328"),
    CountryRecord::new("Hong Kong", "HK", "HKG", "344"),
    CountryRecord::new("Honduras", "HN", "HND", "340"),
    CountryRecord::new("Croatia", "HR", "HRV", "191"),
    CountryRecord::new("Haiti", "HT", "HTI", "332"),
    CountryRecord::new("Hungary", "HU", "HUN", "348"),
    CountryRecord::new("Indonesia", "ID", "IDN", "360"),
    CountryRecord::new("Ireland", "IE", "IRL", "372"),
    CountryRecord::new("Israel", "IL", "ISR", "376"),
    CountryRecord::new("India", "IN", "IND", "356"),
    CountryRecord::new("Iraq", "IQ", "IRQ", "368"),
    CountryRecord::new("Iran, Islamic Republic of", "IR", "IRN", "364"),
    CountryRecord::new("Iceland", "IS", "ISL", "352"),
    CountryRecord::new("Italy", "IT", "ITA", "380"),
    CountryRecord::new("Jersey", "JE", "JEY", "832"),
    CountryRecord::new("Jamaica", "JM", "JAM", "388"),
    CountryRecord::new("Jordan", "JO", "JOR", "400"),
    CountryRecord::new("Japan", "JP", "JPN", "392"),
    CountryRecord::new("Kenya", "KE", "KEN", "404"),
    CountryRecord::new("Saint Kitts and Nevis", "KN", "KNA", "659"),
    CountryRecord::new("Korea, Republic of", "KR", "KOR", "410"),
    CountryRecord::new("Cayman Islands", "KY", "CYM", "136"),
    CountryRecord::new("Kazakhstan", "KZ", "KAZ", "398"),
    CountryRecord::new("Lao People's Democratic Republic", "LA", "LAO", "418"),
    CountryRecord::new("Lebanon", "LB", "LBN", "422"),
    CountryRecord::new("Saint Lucia", "LC", "LCA", "662"),
    CountryRecord::new("Liechtenstein", "LI", "LIE", "438"),
    CountryRecord::new("Sri Lanka", "LK", "LKA", "144"),
    CountryRecord::new("Lesotho", "LS", "LSO", "426"),
    CountryRecord::new("Lithuania", "LT", "LTU", "440"),
    CountryRecord::new("Luxembourg", "LU", "LUX", "442"),
    CountryRecord::new("Latvia", "LV", "LVA", "428"),
    CountryRecord::new("Morocco", "MA", "MAR", "504"),
    CountryRecord::new("Monaco", "MC", "MCO", "492"),
    CountryRecord::new("Moldova, Republic of", "MD", "MDA", "498"),
    CountryRecord::new("Montenegro", "ME", "MNE", "499"),
    CountryRecord::new("North Macedonia", "MK", "MKD", "807"),
    CountryRecord::new("Macao", "MO", "MAC", "446"),
    CountryRecord::new("Northern Mariana Islands", "MP", "MNP", "580"),
    CountryRecord::new("Montserrat", "MS", "MSR", "500"),
    CountryRecord::new("Malta", "MT", "MLT", "470"),
    CountryRecord::new("Mauritius", "MU", "MUS", "480"),
    CountryRecord::new("Maldives", "MV", "MDV", "462"),
    CountryRecord::new("Malawi", "MW", "MWI", "454"),
    CountryRecord::new("Mexico", "MX", "MEX", "484"),
    CountryRecord::new("Malaysia", "MY", "MYS", "458"),
    CountryRecord::new("Mozambique", "MZ", "MOZ", "508"),
    CountryRecord::new("Namibia", "NA", "NAM", "516"),
    CountryRecord::new("Nigeria", "NG", "NGA", "566"),
    CountryRecord::new("Netherlands", "NL", "NLD", "528"),
    CountryRecord::new("Norway", "NO", "NOR", "578"),
    CountryRecord::new("Nepal", "NP", "NPL", "524"),
    CountryRecord::new("New Zealand", "NZ", "NZL", "554"),
    CountryRecord::new("Panama", "PA", "PAN", "591"),
    CountryRecord::new("Peru", "PE", "PER", "604"),
    CountryRecord::new("French Polynesia", "PF", "PYF", "258"),
    CountryRecord::new("Papua New Guinea", "PG", "PNG", "598"),
    CountryRecord::new("Philippines", "PH", "PHL", "608"),
    CountryRecord::new("Pakistan", "PK", "PAK", "586"),
    CountryRecord::new("Poland", "PL", "POL", "616"),
    CountryRecord::new("Puerto Rico", "PR", "PRI", "630"),
    CountryRecord::new("Portugal", "PT", "PRT", "620"),
    CountryRecord::new("Paraguay", "PY", "PRY", "600"),
    CountryRecord::new("Qatar", "QA", "QAT", "634"),
    CountryRecord::new("Romania", "RO", "ROU", "642"),
    CountryRecord::new("Serbia", "RS", "SRB", "688"),
    CountryRecord::new("Russian Federation", "RU", "RUS", "643"),
    CountryRecord::new("Saudi Arabia", "SA", "SAU", "682"),
    CountryRecord::new("Solomon Islands", "SB", "SLB", "090"),
    CountryRecord::new("Seychelles", "SC", "SYC", "690"),
    CountryRecord::new("Sweden", "SE", "SWE", "752"),
    CountryRecord::new("Singapore", "SG", "SGP", "702"),
    CountryRecord::new("Slovenia", "SI", "SVN", "705"),
    CountryRecord::new("Slovakia", "SK", "SVK", "703"),
    CountryRecord::new("Sierra Leone", "SL", "SLE", "694"),
    CountryRecord::new("San Marino", "SM", "SMR", "674"),
    CountryRecord::new("Senegal", "SN", "SEN", "686"),
    CountryRecord::new("El Salvador", "SV", "SLV", "222"),
    CountryRecord::new("Sint Maarten (Dutch part)", "SX", "SXM", "534"),
    CountryRecord::new("Eswatini", "SZ", "SWZ", "748"),
    CountryRecord::new("Turks and Caicos Islands", "TC", "TCA", "796"),
    CountryRecord::new("Thailand", "TH", "THA", "764"),
    CountryRecord::new("Tunisia", "TN", "TUN", "788"),
    CountryRecord::new("Tonga", "TO", "TON", "776"),
    CountryRecord::new("Türkiye", "TR", "TUR", "792"),
    CountryRecord::new("Trinidad and Tobago", "TT", "TTO", "780"),
    CountryRecord::new("Taiwan, Province of China", "TW", "TWN", "158"),
    CountryRecord::new("Tanzania, United Republic of", "TZ", "TZA", "834"),
    CountryRecord::new("Ukraine", "UA", "UKR", "804"),
    CountryRecord::new("Uganda", "UG", "UGA", "800"),
    CountryRecord::new("United States of America", "US", "USA", "840"),
    CountryRecord::new("Uruguay", "UY", "URY", "858"),
    CountryRecord::new("Uzbekistan", "UZ", "UZB", "860"),
    CountryRecord::new("Saint Vincent and the Grenadines", "VC", "VCT", "670"),
    CountryRecord::new("Venezuela, Bolivarian Republic of", "VE", "VEN", "862"),
    CountryRecord::new("Virgin Islands, British", "VG", "VGB", "092"),
    CountryRecord::new("Viet Nam", "VN", "VNM", "704"),
    CountryRecord::new("Vanuatu", "VU", "VUT", "548"),
    // User-assigned code; ISO 3166 defines no numeric value for Kosovo.
    CountryRecord::new("Kosovo", "XK", "XKX", ""),
    CountryRecord::new("South Africa", "ZA", "ZAF", "710"),
    CountryRecord::new("Zambia", "ZM", "ZMB", "894"),
    CountryRecord::new("Zimbabwe", "ZW", "ZWE", "716"),
];
