//! Rectangular frequency-domain band filters
//!
//! Bins outside the pass band are replaced with `0 + 0i`; bins inside pass
//! through untouched, phase included. There is no tapering, so sharp features
//! in the signal ring after reconstruction.

use crate::error::{Advisory, Result, SpectralError};
use crate::spectrum::Spectrum;
use num_complex::Complex;

/// Band filter selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandFilter {
    /// Keep bins at or below `cutoff`; DC always passes
    Lowpass { cutoff: f64 },

    /// Keep bins at or above `cutoff`
    Highpass { cutoff: f64 },

    /// Keep bins within `[low, high]`
    Bandpass { low: f64, high: f64 },
}

impl Default for BandFilter {
    fn default() -> Self {
        BandFilter::Lowpass {
            cutoff: f64::INFINITY,
        }
    }
}

impl BandFilter {
    /// Check filter parameters
    pub fn validate(&self) -> Result<()> {
        match *self {
            BandFilter::Lowpass { cutoff } | BandFilter::Highpass { cutoff } => {
                if cutoff.is_nan() {
                    return Err(SpectralError::InvalidCutoff(cutoff));
                }
            }
            BandFilter::Bandpass { low, high } => {
                if low.is_nan() {
                    return Err(SpectralError::InvalidCutoff(low));
                }
                if high.is_nan() {
                    return Err(SpectralError::InvalidCutoff(high));
                }
                if low > high {
                    return Err(SpectralError::InvalidBand { low, high });
                }
            }
        }
        Ok(())
    }

    /// Whether the bin at `frequency` survives the filter
    #[inline]
    pub fn passes(&self, frequency: f64) -> bool {
        match *self {
            // Negative cutoffs behave like zero: a low-pass never drops DC
            BandFilter::Lowpass { cutoff } => frequency <= cutoff.max(0.0),
            BandFilter::Highpass { cutoff } => frequency >= cutoff,
            BandFilter::Bandpass { low, high } => frequency >= low && frequency <= high,
        }
    }

    /// Apply the filter to raw coefficients and their frequency bins
    pub fn apply_raw(
        &self,
        spectrum: &[Complex<f64>],
        freq_bins: &[f64],
    ) -> Result<Vec<Complex<f64>>> {
        if spectrum.len() != freq_bins.len() {
            return Err(SpectralError::LengthMismatch {
                spectrum: spectrum.len(),
                bins: freq_bins.len(),
            });
        }
        self.validate()?;

        let zero = Complex::new(0.0, 0.0);
        let filtered: Vec<Complex<f64>> = spectrum
            .iter()
            .zip(freq_bins.iter())
            .map(|(&c, &f)| if self.passes(f) { c } else { zero })
            .collect();

        log::debug!(
            "{:?}: kept {} of {} bins",
            self,
            freq_bins.iter().filter(|&&f| self.passes(f)).count(),
            freq_bins.len()
        );

        Ok(filtered)
    }

    /// Apply the filter to a spectrum, returning a filtered copy
    pub fn apply(&self, spectrum: &Spectrum) -> Result<Spectrum> {
        let filtered = self.apply_raw(spectrum.coefficients(), spectrum.frequencies())?;
        Ok(spectrum.with_coefficients(filtered))
    }

    /// Advisory for filters that leave nothing but the DC bin
    ///
    /// Applies to every filter kind; spectra with a single bin never qualify.
    pub fn advisory(&self, freq_bins: &[f64]) -> Option<Advisory> {
        let (dc, ac) = freq_bins.split_first()?;
        if ac.is_empty() || !self.passes(*dc) || ac.iter().any(|&f| self.passes(f)) {
            return None;
        }
        Some(Advisory::DcOnly)
    }
}

/// Zero every coefficient whose frequency bin lies strictly above `cutoff`
///
/// # Arguments
/// * `spectrum` - One-sided coefficients
/// * `freq_bins` - Frequency of each coefficient (same length)
/// * `cutoff` - Highest frequency to keep
pub fn filter_lowpass(
    spectrum: &[Complex<f64>],
    freq_bins: &[f64],
    cutoff: f64,
) -> Result<Vec<Complex<f64>>> {
    BandFilter::Lowpass { cutoff }.apply_raw(spectrum, freq_bins)
}

/// True when a low-pass at `cutoff` keeps only the DC bin
///
/// Signals with a single bin (N = 1) have nothing to drop and never qualify.
pub fn is_degenerate(freq_bins: &[f64], cutoff: f64) -> bool {
    freq_bins
        .iter()
        .skip(1)
        .copied()
        .fold(None, |min: Option<f64>, f| Some(min.map_or(f, |m| m.min(f))))
        .map_or(false, |lowest_ac| cutoff < lowest_ac)
}
