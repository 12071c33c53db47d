//! High-level spectrum analyzer
//!
//! Turns a uniformly sampled real signal into a normalized one-sided spectrum
//! with physical frequency bins.
//!
//! Normalization: every coefficient is scaled by `2/N`. This treats each bin as
//! if its negative-frequency mirror carried equal energy, which over-scales the
//! DC bin and (for even N) the Nyquist bin by a factor of two. The convention is
//! kept as-is so that amplitudes of pure tones read directly off the spectrum.

use super::fft::FftEngine;
use crate::error::{Result, SpectralError};
use crate::signal::sampled::{validate_samples, validate_spacing};
use crate::signal::SampledSignal;
use num_complex::Complex;

/// Normalized one-sided spectrum of a real signal
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    coefficients: Vec<Complex<f64>>,
    frequencies: Vec<f64>,
    signal_len: usize,
    sample_spacing: f64,
}

impl Spectrum {
    /// Assemble a spectrum from parts, checking their shapes agree
    pub fn from_parts(
        coefficients: Vec<Complex<f64>>,
        frequencies: Vec<f64>,
        signal_len: usize,
        sample_spacing: f64,
    ) -> Result<Self> {
        if signal_len == 0 {
            return Err(SpectralError::EmptySignal);
        }
        validate_spacing(sample_spacing)?;
        let expected = signal_len / 2 + 1;
        if coefficients.len() != expected {
            return Err(SpectralError::SpectrumLength {
                expected,
                found: coefficients.len(),
            });
        }
        if frequencies.len() != coefficients.len() {
            return Err(SpectralError::LengthMismatch {
                spectrum: coefficients.len(),
                bins: frequencies.len(),
            });
        }

        Ok(Self {
            coefficients,
            frequencies,
            signal_len,
            sample_spacing,
        })
    }

    /// Same frequency grid, different coefficients
    pub(crate) fn with_coefficients(&self, coefficients: Vec<Complex<f64>>) -> Self {
        debug_assert_eq!(coefficients.len(), self.coefficients.len());
        Self {
            coefficients,
            frequencies: self.frequencies.clone(),
            signal_len: self.signal_len,
            sample_spacing: self.sample_spacing,
        }
    }

    /// Complex coefficients, already scaled by `2/N`
    pub fn coefficients(&self) -> &[Complex<f64>] {
        &self.coefficients
    }

    /// Frequency of each bin in physical units (cycles per unit of x)
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Length N of the signal this spectrum was computed from
    pub fn signal_len(&self) -> usize {
        self.signal_len
    }

    pub fn sample_spacing(&self) -> f64 {
        self.sample_spacing
    }

    pub fn num_bins(&self) -> usize {
        self.coefficients.len()
    }

    /// DC coefficient (twice the sample mean under the `2/N` convention)
    pub fn dc(&self) -> Complex<f64> {
        self.coefficients[0]
    }

    /// Amplitude |X[k]| of each bin
    pub fn amplitudes(&self) -> Vec<f64> {
        self.coefficients.iter().map(|c| c.norm()).collect()
    }

    /// Phase arg(X[k]) of each bin in radians
    pub fn phases(&self) -> Vec<f64> {
        self.coefficients.iter().map(|c| c.arg()).collect()
    }

    /// Amplitude in dB relative to `reference`
    ///
    /// # Arguments
    /// * `reference` - Reference level for dB (finite, > 0; 1.0 for plain dB)
    ///
    /// # Returns
    /// 20*log10(|X[k]|/reference), with |X[k]| clamped to 1e-10
    pub fn amplitudes_db(&self, reference: f64) -> Result<Vec<f64>> {
        if !reference.is_finite() || reference <= 0.0 {
            return Err(SpectralError::InvalidReference(reference));
        }

        Ok(self
            .coefficients
            .iter()
            .map(|c| {
                let mag_clamped = c.norm().max(1e-10); // Avoid log(0)
                20.0 * (mag_clamped / reference).log10()
            })
            .collect())
    }

    /// Strongest non-DC bin as `(frequency, amplitude)`
    ///
    /// Returns `None` when the spectrum has no AC bins (N = 1).
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.coefficients
            .iter()
            .zip(self.frequencies.iter())
            .skip(1)
            .map(|(c, &f)| (f, c.norm()))
            .fold(None, |best: Option<(f64, f64)>, (f, amp)| match best {
                Some((_, best_amp)) if best_amp >= amp => best,
                _ => Some((f, amp)),
            })
    }

    pub fn into_parts(self) -> (Vec<Complex<f64>>, Vec<f64>) {
        (self.coefficients, self.frequencies)
    }
}

/// Physical frequency of each one-sided bin for `n` samples spaced `dx` apart
///
/// Bin `k` sits at `k / N` cycles per sample, converted to physical units by
/// dividing by the sampled domain length `max(x) + dx = N * dx`.
/// Empty for `n == 0`.
pub fn frequency_bins(n: usize, dx: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }

    let max_x = n.saturating_sub(1) as f64 * dx;
    let domain_length = max_x + dx;
    let scale = n as f64 / domain_length;

    (0..n / 2 + 1)
        .map(|k| (k as f64 / n as f64) * scale)
        .collect()
}

/// Analyze a real signal sampled with spacing `dx`
pub fn analyze(signal: &[f64], dx: f64) -> Result<Spectrum> {
    let mut analyzer = SpectrumAnalyzer::new(AnalyzerConfig { sample_spacing: dx });
    analyzer.analyze(signal)
}

/// Analyze a signal given explicit, uniformly spaced coordinates
pub fn analyze_sampled(x: &[f64], y: &[f64]) -> Result<Spectrum> {
    let signal = SampledSignal::from_coordinates(x, y)?;
    analyze_signal(&signal)
}

/// Analyze a [`SampledSignal`] using its own spacing
pub fn analyze_signal(signal: &SampledSignal) -> Result<Spectrum> {
    analyze(signal.samples(), signal.spacing())
}

/// Spectrum analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Distance between consecutive samples (dx), in physical units
    pub sample_spacing: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { sample_spacing: 1.0 }
    }
}

/// Spectrum analyzer that reuses its FFT plan across equal-length signals
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    fft_engine: Option<FftEngine>,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            fft_engine: None,
        }
    }

    /// Analyze signal and return its normalized one-sided spectrum
    ///
    /// # Arguments
    /// * `signal` - Real samples, N >= 1
    ///
    /// # Returns
    /// N/2 + 1 coefficients scaled by 2/N, with physical frequency bins
    pub fn analyze(&mut self, signal: &[f64]) -> Result<Spectrum> {
        validate_samples(signal)?;
        validate_spacing(self.config.sample_spacing)?;

        let n = signal.len();
        let engine = self.engine_for(n)?;
        let mut coefficients = engine.forward(signal)?;

        let norm = 2.0 / n as f64;
        for c in coefficients.iter_mut() {
            *c *= norm;
        }

        let frequencies = frequency_bins(n, self.config.sample_spacing);

        Ok(Spectrum {
            coefficients,
            frequencies,
            signal_len: n,
            sample_spacing: self.config.sample_spacing,
        })
    }

    /// Get frequency bins for a signal of length `n` under the current spacing
    pub fn frequency_bins(&self, n: usize) -> Vec<f64> {
        frequency_bins(n, self.config.sample_spacing)
    }

    /// Update configuration
    pub fn update_config(&mut self, config: AnalyzerConfig) {
        self.config = config;
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub(crate) fn engine_for(&mut self, n: usize) -> Result<&mut FftEngine> {
        let needs_new_fft = self
            .fft_engine
            .as_ref()
            .map_or(true, |engine| engine.fft_size() != n);

        if needs_new_fft {
            self.fft_engine = Some(FftEngine::new(n)?);
        }

        self.fft_engine
            .as_mut()
            .ok_or_else(|| SpectralError::Transform("FFT engine unavailable".into()))
    }
}
