// Python wrapper classes for ISRC values and allocation data

use crate::error::isrc_error_to_py_err;
use iso3901::{Agency, Allocation, AllocationEntry, CountryRecord, Isrc, IsrcError};
use pyo3::prelude::*;
use pyo3::types::PyString;

/// Extract the text of a Python `str`, rejecting every other type.
fn expect_str(value: &Bound<'_, PyAny>) -> Result<String, IsrcError> {
    if !value.is_instance_of::<PyString>() {
        return Err(IsrcError::InvalidType);
    }
    value.extract::<String>().map_err(|_| IsrcError::InvalidType)
}

/// Python wrapper for a country, territory or pseudo-entity record
#[pyclass(name = "Country", frozen, from_py_object)]
#[derive(Clone)]
pub struct PyCountry {
    pub inner: CountryRecord,
}

#[pymethods]
impl PyCountry {
    /// English short name
    #[getter]
    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// ISO 3166-1 alpha-2 code (empty for worldwide allocations)
    #[getter]
    pub fn alpha2(&self) -> &'static str {
        self.inner.alpha2
    }

    /// ISO 3166-1 alpha-3 code (empty for worldwide allocations)
    #[getter]
    pub fn alpha3(&self) -> &'static str {
        self.inner.alpha3
    }

    /// ISO 3166-1 numeric code (empty for worldwide allocations)
    #[getter]
    pub fn numeric(&self) -> &'static str {
        self.inner.numeric
    }

    /// Whether this is a worldwide or defunct-state placeholder
    #[getter]
    pub fn is_pseudo(&self) -> bool {
        self.inner.is_pseudo()
    }

    fn __repr__(&self) -> String {
        format!("<Country {} alpha2={:?}>", self.inner.name, self.inner.alpha2)
    }

    fn __str__(&self) -> String {
        self.inner.name.to_string()
    }

    fn __eq__(&self, other: &PyCountry) -> bool {
        self.inner == other.inner
    }
}

/// Python wrapper for an agency allocating ISRC prefixes
///
/// # Examples
///
/// ```python
/// from iso3901 import Agency, Allocation
/// tc = Allocation.lookup("TC").agency
/// tc == Agency.from_code("TC")   # True
/// tc.value                       # 'TuneCore Inc'
/// ```
#[pyclass(name = "Agency", frozen, eq, hash, from_py_object)]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PyAgency {
    pub inner: Agency,
}

#[pymethods]
impl PyAgency {
    /// Human-readable agency name
    #[getter]
    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// Same as `name`, mirroring an enum member's value
    #[getter]
    pub fn value(&self) -> &'static str {
        self.inner.name()
    }

    /// Short key of the agency, e.g. "IIRA" or "US"
    #[getter]
    pub fn code(&self) -> &'static str {
        self.inner.code()
    }

    /// Look up an agency by its short key
    ///
    /// Returns None for unknown keys.
    #[staticmethod]
    pub fn from_code(code: &str) -> Option<PyAgency> {
        Agency::ALL
            .iter()
            .find(|agency| agency.code() == code)
            .map(|agency| PyAgency { inner: *agency })
    }

    /// Every agency, in declaration order
    #[staticmethod]
    pub fn all() -> Vec<PyAgency> {
        Agency::ALL
            .iter()
            .map(|agency| PyAgency { inner: *agency })
            .collect()
    }

    fn __repr__(&self) -> String {
        format!("<Agency {} name={:?}>", self.inner.code(), self.inner.name())
    }

    fn __str__(&self) -> String {
        self.inner.name().to_string()
    }
}

/// Python wrapper for one row of the prefix allocation table
#[pyclass(name = "Allocation", frozen, from_py_object)]
#[derive(Clone)]
pub struct PyAllocation {
    pub inner: AllocationEntry,
}

#[pymethods]
impl PyAllocation {
    /// Two-letter ISRC prefix
    #[getter]
    pub fn prefix(&self) -> &'static str {
        self.inner.prefix
    }

    /// Agency allocating the prefix
    #[getter]
    pub fn agency(&self) -> PyAgency {
        PyAgency {
            inner: self.inner.agency,
        }
    }

    /// Territory the prefix stands for
    #[getter]
    pub fn country(&self) -> PyCountry {
        PyCountry {
            inner: self.inner.country,
        }
    }

    /// Whether the prefix is retired
    #[getter]
    pub fn retired(&self) -> bool {
        self.inner.retired
    }

    /// Look up a prefix (exact, uppercase match)
    ///
    /// Returns None for unallocated prefixes.
    #[staticmethod]
    pub fn lookup(prefix: &str) -> Option<PyAllocation> {
        Allocation::lookup(prefix).map(|entry| PyAllocation { inner: *entry })
    }

    /// Every allocation, in table order
    #[staticmethod]
    pub fn all() -> Vec<PyAllocation> {
        Allocation::all()
            .map(|entry| PyAllocation { inner: *entry })
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "<Allocation {} agency={:?} retired={}>",
            self.inner.prefix,
            self.inner.agency.name(),
            self.inner.retired
        )
    }
}

/// Python wrapper for an ISRC (ISO 3901) value
///
/// # Examples
///
/// ```python
/// from iso3901 import ISRC
/// isrc = ISRC.parse("ISRC NL-A50-87-00208")
/// str(isrc)             # 'NLA508700208'
/// isrc.stringify()      # 'NL-A50-87-00208'
/// isrc.country.name     # 'Netherlands'
/// ```
#[pyclass(name = "ISRC", frozen, eq, hash, from_py_object)]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PyIsrc {
    pub inner: Isrc,
}

#[pymethods]
impl PyIsrc {
    /// Assemble an ISRC from its components without validation
    #[new]
    pub fn new(owner: String, year: u8, designation: u32) -> Self {
        PyIsrc {
            inner: Isrc::new(owner, year, designation),
        }
    }

    /// Parse an ISRC string
    ///
    /// Raises TypeError for non-string arguments and ValueError for
    /// malformed codes or unknown prefixes.
    #[staticmethod]
    pub fn parse(text: &Bound<'_, PyAny>) -> PyResult<PyIsrc> {
        let text = expect_str(text).map_err(isrc_error_to_py_err)?;
        Isrc::parse(&text)
            .map(|inner| PyIsrc { inner })
            .map_err(isrc_error_to_py_err)
    }

    /// Whether `parse` would accept the argument; never raises
    #[staticmethod]
    pub fn validate(text: &Bound<'_, PyAny>) -> bool {
        expect_str(text).map_or(false, |text| Isrc::validate(&text))
    }

    /// Five-character registrant code
    #[getter]
    pub fn owner(&self) -> String {
        self.inner.owner().to_string()
    }

    /// Last two digits of the reference year
    #[getter]
    pub fn year(&self) -> u8 {
        self.inner.year()
    }

    /// Designation code
    #[getter]
    pub fn designation(&self) -> u32 {
        self.inner.designation()
    }

    /// Original string when created via `parse`, else None
    #[getter]
    pub fn raw(&self) -> Option<String> {
        self.inner.raw().map(str::to_string)
    }

    /// First two letters of the code
    #[getter]
    pub fn prefix(&self) -> String {
        self.inner.prefix().to_string()
    }

    /// Territory of the prefix, or None for unallocated prefixes
    #[getter]
    pub fn country(&self) -> Option<PyCountry> {
        self.inner.country().map(|record| PyCountry { inner: *record })
    }

    /// Agency display name, or None for unallocated prefixes
    #[getter]
    pub fn agency(&self) -> Option<&'static str> {
        self.inner.agency_name()
    }

    /// True for retired or unallocated prefixes
    #[getter]
    pub fn retired(&self) -> bool {
        self.inner.retired()
    }

    /// Format the code, hyphenated by default
    #[pyo3(signature = (separator = true))]
    pub fn stringify(&self, separator: bool) -> String {
        self.inner.stringify(separator)
    }

    fn __repr__(&self) -> String {
        format!("ISRC({:?}, {}, {})", self.inner.owner(), self.inner.year(), self.inner.designation())
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}
