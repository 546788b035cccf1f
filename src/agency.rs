//! Agencies responsible for allocating ISRC prefixes.
//!
//! Each national agency (or the International ISRC Registration Authority,
//! for territories without one) hands out registrant codes under one or more
//! two-letter prefixes. The allocation data follows the IFPI
//! "Valid Characters" list, last updated 2023-02-08.

use serde::{Serialize, Serializer};
use std::fmt;

macro_rules! agencies {
    ($( $(#[$meta:meta])* $variant:ident => ($code:literal, $name:literal), )+) => {
        /// Name of a national or worldwide agency responsible for allocating
        /// ISRC prefixes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Agency {
            $( $(#[$meta])* $variant, )+
        }

        impl Agency {
            /// Every agency, in declaration order.
            pub const ALL: &'static [Agency] = &[ $( Agency::$variant, )+ ];

            /// Human-readable agency name.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $( Agency::$variant => $name, )+
                }
            }

            /// Short key of the agency, usually the alpha-2 code of the
            /// territory it serves.
            #[must_use]
            pub fn code(self) -> &'static str {
                match self {
                    $( Agency::$variant => $code, )+
                }
            }
        }
    };
}

agencies! {
    /// International ISRC Registration Authority
    Iira => ("IIRA", "International ISRC Registration Authority"),
    /// Argentina
    Capif => ("AR", "CAPIF"),
    /// Austria
    Lsg => ("AT", "LSG"),
    /// Australia
    Aria => ("AU", "ARIA"),
    /// Barbados
    Coscap => ("BB", "COSCAP"),
    /// Belgium and Luxembourg
    Simim => ("BE", "SIMIM"),
    /// Brazil
    ProMusicaBrazil => ("BR", "Pro‐música Brazil"),
    /// Canada
    Connect => ("CA", "Connect"),
    /// Switzerland and Liechtenstein
    IfpiSwitzerland => ("CH", "IFPI Switzerland"),
    /// Chile
    IfpiChile => ("CL", "IFPI Chile"),
    /// Czechia
    Intergram => ("CZ", "INTERGRAM"),
    /// Germany
    Bvmi => ("DE", "BVMI"),
    /// Denmark, Faroe Islands and Greenland
    GramexDk => ("DK", "GRAMEK DK"),
    /// Dominican Republic
    Sodinpro => ("DO", "SODINPRO"),
    /// Estonia
    Efu => ("EE", "EFU"),
    /// Spain
    Agedi => ("ES", "AGEDI"),
    /// Finland
    IfpiFinland => ("FI", "IFPI Finland"),
    /// France
    Scpp => ("FR", "SCPP"),
    /// United Kingdom
    PplUk => ("GB", "PPL UK"),
    /// Greece
    IfpiGreece => ("GR", "IFPI Greece"),
    /// Hong Kong
    IfpiHongKong => ("HK", "IFPI Hong Kong"),
    /// Indonesia
    Asiri => ("ID", "ASIRI"),
    /// Ireland
    Ppi => ("IE", "PPI"),
    /// Israel
    IfpiIsrael => ("IL", "IFPI"),
    /// India
    Imi => ("IN", "IMI"),
    /// Iceland
    Sfh => ("IS", "SFH"),
    /// Italy
    Fimi => ("IT", "FIMI"),
    /// Jamaica
    Jamms => ("JM", "JAMMS"),
    /// Japan
    Riaj => ("JP", "RIAJ"),
    /// South Korea
    Kmca => ("KR", "KMCA"),
    /// Lithuania
    Agata => ("LT", "AGATA"),
    /// Latvia
    Laipa => ("LV", "LaIPA"),
    /// Mexico
    Amprofon => ("MX", "AMPROFON"),
    /// Malaysia
    Rim => ("MY", "RIM"),
    /// Netherlands
    Sena => ("NL", "SENA"),
    /// Norway
    Gramo => ("NO", "Gramo"),
    /// New Zealand, Fiji and Tonga
    RecordedMusicNz => ("NZ", "Recorded Music NZ"),
    /// Panama
    Produce => ("PA", "PRODUCE"),
    /// Peru
    Unimpro => ("PE", "UNIMPRO"),
    /// Philippines
    Pari => ("PH", "PARI"),
    /// Poland
    Zpav => ("PL", "ZPAV"),
    /// Portugal
    Afp => ("PT", "AFP"),
    /// Paraguay
    Sgp => ("PY", "SGP"),
    /// Romania
    Upfr => ("RO", "UPFR"),
    /// Sweden
    IfpiSweden => ("SE", "IFPI Sweden"),
    /// Singapore
    Rias => ("SG", "Recording Industry Association Singapore"),
    /// Slovakia
    Slovgram => ("SK", "SLOVGRAM"),
    /// Commercial registrant holding the `TC` prefix
    TuneCore => ("TC", "TuneCore Inc"),
    /// Thailand
    Teca => ("TH", "TECA"),
    /// Türkiye
    MuYap => ("TR", "MU‐YAP"),
    /// Trinidad and Tobago
    Cott => ("TT", "COTT"),
    /// Taiwan
    Rit => ("TW", "RIT"),
    /// Ukraine
    UkrainianMusicAlliance => ("UA", "Ukrainian Music Alliance"),
    /// United States
    Riaa => ("US", "RIAA"),
    /// Uruguay
    CamaraUruguayaDelDisco => ("UY", "Camara Uruguaya Del Disco"),
    /// South Africa
    Risa => ("ZA", "RISA"),
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Agency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
