//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use crate::error::SpectralError;

mod filter_bindings;
mod spectrum_bindings;
mod processor_bindings;

impl From<SpectralError> for PyErr {
    fn from(err: SpectralError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn spectral_lowpass(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(spectrum_bindings::analyze, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::reconstruct, m)?)?;
    m.add_function(wrap_pyfunction!(filter_bindings::filter_lowpass, m)?)?;
    m.add_class::<processor_bindings::PyLowPassProcessor>()?;

    Ok(())
}
