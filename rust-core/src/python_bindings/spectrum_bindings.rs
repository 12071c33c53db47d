//! Python bindings for spectrum analysis and reconstruction

use pyo3::prelude::*;
use numpy::{Complex64, PyArray1, PyReadonlyArray1};
use crate::spectrum::{analyze as analyze_samples, reconstruct_with_len};

/// Analyze a real signal
///
/// Args:
///     signal: Real samples as numpy array
///     dx: Sample spacing
///
/// Returns:
///     Tuple of (complex spectrum scaled by 2/N, frequency bins)
#[pyfunction]
pub fn analyze<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
    dx: f64,
) -> PyResult<(&'py PyArray1<Complex64>, &'py PyArray1<f64>)> {
    let spectrum = analyze_samples(signal.as_slice()?, dx)?;
    let (coefficients, frequencies) = spectrum.into_parts();

    Ok((
        PyArray1::from_vec(py, coefficients),
        PyArray1::from_vec(py, frequencies),
    ))
}

/// Reconstruct samples from a normalized one-sided spectrum
///
/// Args:
///     spectrum: Complex spectrum as returned by `analyze`
///     n: Original signal length (default: 2 * (len(spectrum) - 1))
///
/// Returns:
///     Real samples as numpy array
#[pyfunction]
#[pyo3(signature = (spectrum, n=None))]
pub fn reconstruct<'py>(
    py: Python<'py>,
    spectrum: PyReadonlyArray1<Complex64>,
    n: Option<usize>,
) -> PyResult<&'py PyArray1<f64>> {
    let coefficients = spectrum.as_slice()?;
    let n = n.unwrap_or_else(|| 2 * coefficients.len().saturating_sub(1));
    let samples = reconstruct_with_len(coefficients, n)?;

    Ok(PyArray1::from_vec(py, samples))
}
