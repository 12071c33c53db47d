//! Python bindings for band filtering

use pyo3::prelude::*;
use numpy::{Complex64, PyArray1, PyReadonlyArray1};
use crate::filters;

/// Zero every coefficient above the cutoff frequency
///
/// Args:
///     spectrum: Complex spectrum
///     freq_bins: Frequency of each coefficient
///     cutoff: Highest frequency to keep
///
/// Returns:
///     Filtered complex spectrum
#[pyfunction]
pub fn filter_lowpass<'py>(
    py: Python<'py>,
    spectrum: PyReadonlyArray1<Complex64>,
    freq_bins: PyReadonlyArray1<f64>,
    cutoff: f64,
) -> PyResult<&'py PyArray1<Complex64>> {
    let filtered = filters::filter_lowpass(spectrum.as_slice()?, freq_bins.as_slice()?, cutoff)?;

    Ok(PyArray1::from_vec(py, filtered))
}
