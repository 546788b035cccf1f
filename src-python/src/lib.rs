// ISO 3901 Python wrapper using PyO3
// This module provides Python bindings to the Rust ISRC library

mod error;
mod wrappers;

use pyo3::prelude::*;
use wrappers::{PyAgency, PyAllocation, PyCountry, PyIsrc};

/// Initialize the Python module
#[pymodule]
fn _iso3901(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyIsrc>()?;
    m.add_class::<PyAgency>()?;
    m.add_class::<PyCountry>()?;
    m.add_class::<PyAllocation>()?;

    m.add(
        "__doc__",
        "Structured parsing of ISRC (International Standard Recording Code), as defined in ISO 3901",
    )?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
