// Error handling and mapping from Rust to Python exceptions

use iso3901::IsrcError;
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::PyErr;

/// Map Rust IsrcError to Python exceptions
///
/// A non-string argument raises `TypeError`; every malformed or unallocated
/// code raises `ValueError`.
pub fn isrc_error_to_py_err(err: IsrcError) -> PyErr {
    match err {
        IsrcError::InvalidType => PyTypeError::new_err(err.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}
