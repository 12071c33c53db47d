//! FFT engine using realfft for real-valued signals
//!
//! Forward and inverse one-sided transforms of a fixed length. Both directions
//! are unnormalized, as delivered by realfft.

use crate::error::{Result, SpectralError};
use num_complex::Complex;
use realfft::{ComplexToReal, RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// FFT engine for real-valued signals
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Real-to-complex processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Complex-to-real processor
    c2r: Arc<dyn ComplexToReal<f64>>,

    /// Reusable time-domain buffer
    real_buffer: Vec<f64>,

    /// Reusable frequency-domain buffer (N/2 + 1 bins)
    complex_buffer: Vec<Complex<f64>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples, any length >= 1)
    pub fn new(fft_size: usize) -> Result<Self> {
        if fft_size == 0 {
            return Err(SpectralError::EmptySignal);
        }

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);
        let c2r = planner.plan_fft_inverse(fft_size);
        log::debug!("planned real FFT pair of size {}", fft_size);

        let real_buffer = r2c.make_input_vec();
        let complex_buffer = r2c.make_output_vec();

        Ok(Self {
            fft_size,
            r2c,
            c2r,
            real_buffer,
            complex_buffer,
        })
    }

    /// Forward transform X[k] = Σ x[n] e^{-2πikn/N} for k = 0..=N/2
    ///
    /// # Arguments
    /// * `signal` - Exactly `fft_size` samples
    pub fn forward(&mut self, signal: &[f64]) -> Result<Vec<Complex<f64>>> {
        if signal.len() != self.fft_size {
            return Err(SpectralError::SpectrumLength {
                expected: self.fft_size,
                found: signal.len(),
            });
        }

        // realfft uses the input as scratch, so copy first
        self.real_buffer.copy_from_slice(signal);
        self.r2c
            .process(&mut self.real_buffer, &mut self.complex_buffer)
            .map_err(|e| SpectralError::Transform(e.to_string()))?;
        log::trace!("forward FFT: {} samples -> {} bins", self.fft_size, self.num_bins());

        Ok(self.complex_buffer.clone())
    }

    /// Inverse transform returning N real samples (unnormalized, i.e. N * x[n])
    ///
    /// Imaginary parts of the DC bin and, for even N, the Nyquist bin cannot be
    /// represented by a real signal and are dropped.
    ///
    /// # Arguments
    /// * `spectrum` - Exactly `num_bins()` coefficients
    pub fn inverse(&mut self, spectrum: &[Complex<f64>]) -> Result<Vec<f64>> {
        if spectrum.len() != self.num_bins() {
            return Err(SpectralError::SpectrumLength {
                expected: self.num_bins(),
                found: spectrum.len(),
            });
        }

        self.complex_buffer.copy_from_slice(spectrum);
        self.complex_buffer[0].im = 0.0;
        if self.fft_size % 2 == 0 {
            let nyquist = self.fft_size / 2;
            self.complex_buffer[nyquist].im = 0.0;
        }

        self.c2r
            .process(&mut self.complex_buffer, &mut self.real_buffer)
            .map_err(|e| SpectralError::Transform(e.to_string()))?;
        log::trace!("inverse FFT: {} bins -> {} samples", self.num_bins(), self.fft_size);

        Ok(self.real_buffer.clone())
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Get number of frequency bins (fft_size/2 + 1 for real FFT)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// Convert bin index to normalized frequency (cycles per sample)
    pub fn bin_to_cycles_per_sample(&self, bin: usize) -> f64 {
        bin as f64 / self.fft_size as f64
    }

    /// Get frequency axis in cycles per sample (0 to 0.5)
    pub fn frequency_axis(&self) -> Vec<f64> {
        (0..self.num_bins())
            .map(|bin| self.bin_to_cycles_per_sample(bin))
            .collect()
    }
}
