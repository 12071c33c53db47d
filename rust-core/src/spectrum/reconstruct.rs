//! Signal reconstruction from a normalized one-sided spectrum
//!
//! Exact inverse of [`analyze`](super::analysis::analyze): undo the `2/N`
//! scaling, run the inverse real FFT and divide by N.

use super::analysis::Spectrum;
use super::fft::FftEngine;
use crate::error::{Result, SpectralError};
use num_complex::Complex;

/// Reconstruct N real samples from a (possibly filtered) spectrum
pub fn reconstruct(spectrum: &Spectrum) -> Result<Vec<f64>> {
    let mut engine = FftEngine::new(spectrum.signal_len())?;
    reconstruct_with_engine(&mut engine, spectrum.coefficients())
}

/// Reconstruct `n` samples from raw normalized coefficients
///
/// # Arguments
/// * `coefficients` - `n/2 + 1` coefficients scaled by `2/n`
/// * `n` - Length of the original signal
pub fn reconstruct_with_len(coefficients: &[Complex<f64>], n: usize) -> Result<Vec<f64>> {
    if n == 0 {
        return Err(SpectralError::EmptySignal);
    }
    let mut engine = FftEngine::new(n)?;
    reconstruct_with_engine(&mut engine, coefficients)
}

/// Reconstruct using an existing engine planned for the signal length
pub fn reconstruct_with_engine(
    engine: &mut FftEngine,
    coefficients: &[Complex<f64>],
) -> Result<Vec<f64>> {
    let n = engine.fft_size();
    if coefficients.len() != engine.num_bins() {
        return Err(SpectralError::SpectrumLength {
            expected: engine.num_bins(),
            found: coefficients.len(),
        });
    }

    // Undo 2/N, then the 1/N the unnormalized inverse leaves behind
    let denorm = n as f64 / 2.0;
    let scaled: Vec<Complex<f64>> = coefficients.iter().map(|&c| c * denorm).collect();

    let mut samples = engine.inverse(&scaled)?;
    let scale = 1.0 / n as f64;
    for s in samples.iter_mut() {
        *s *= scale;
    }

    Ok(samples)
}
