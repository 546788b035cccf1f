//! Tests for the prefix allocation table.

use iso3901::country::{SERBIA_AND_MONTENEGRO, WORLDWIDE, YUGOSLAVIA};
use iso3901::{Agency, Allocation, AllocationTable, BuiltinCountries};

#[test]
fn test_worldwide_entries() {
    let zz = Allocation::lookup("ZZ").unwrap();
    assert_eq!(zz.agency, Agency::Iira);
    assert_eq!(zz.country.name, "Worldwide");

    let tc = Allocation::lookup("TC").unwrap();
    assert_eq!(tc.agency, Agency::TuneCore);
    assert_eq!(tc.country, zz.country);
}

#[test]
fn test_country_has_multiple_prefixes() {
    let br = Allocation::lookup("BR").unwrap();
    for code in ["BC", "BK", "BP", "BX"] {
        let entry = Allocation::lookup(code).unwrap();
        assert_eq!(entry.agency, br.agency, "{code}");
        assert_eq!(entry.country, br.country, "{code}");
    }
}

#[test]
fn test_shared_agency_distinct_countries() {
    let nz = Allocation::lookup("NZ").unwrap();
    for code in ["FJ", "TO"] {
        let entry = Allocation::lookup(code).unwrap();
        assert_eq!(entry.agency, nz.agency, "{code}");
        assert_ne!(entry.country, nz.country, "{code}");
    }
}

#[test]
fn test_uk_aliases() {
    let gb = Allocation::lookup("GB").unwrap();
    assert_eq!(Allocation::lookup("UK").unwrap().country, gb.country);
    assert_eq!(gb.country.alpha3, "GBR");
}

#[test]
fn test_defunct_states() {
    assert_eq!(Allocation::lookup("YU").unwrap().country, YUGOSLAVIA);
    assert_eq!(Allocation::lookup("CS").unwrap().country, SERBIA_AND_MONTENEGRO);
    assert!(Allocation::lookup("YU").unwrap().country.is_pseudo());
    assert!(Allocation::lookup("PR").unwrap().retired);
    assert!(!Allocation::lookup("PR").unwrap().country.is_pseudo());
}

#[test]
fn test_lookup_is_exact() {
    assert!(Allocation::lookup("zz").is_none());
    assert!(Allocation::lookup("Z").is_none());
    assert!(Allocation::lookup("ZZZ").is_none());
    assert!(Allocation::lookup("").is_none());
}

#[test]
fn test_every_agency_allocates_something() {
    for agency in Agency::ALL {
        assert!(
            Allocation::all().any(|entry| entry.agency == *agency),
            "{agency:?} has no prefix"
        );
    }
}

#[test]
fn test_worldwide_only_for_reserved_prefixes() {
    let worldwide: Vec<_> = Allocation::all()
        .filter(|entry| entry.country == WORLDWIDE)
        .map(|entry| entry.prefix)
        .collect();
    assert_eq!(worldwide, ["CP", "DG", "ZZ", "TC"]);
}

#[test]
fn test_table_rebuild_is_identical() {
    let rebuilt = AllocationTable::from_registry(&BuiltinCountries).unwrap();
    assert_eq!(&rebuilt, Allocation::table());
}

#[test]
fn test_entry_serialization() {
    let entry = Allocation::lookup("NL").unwrap();
    let value = serde_json::to_value(entry).unwrap();
    assert_eq!(value["prefix"], "NL");
    assert_eq!(value["agency"], "SENA");
    assert_eq!(value["country"]["alpha3"], "NLD");
    assert_eq!(value["retired"], false);
}
