//! Error types for spectral analysis, filtering and reconstruction

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectralError {
    #[error("Signal is empty (at least one sample is required)")]
    EmptySignal,

    #[error("Sample spacing must be finite and positive (found: {0})")]
    InvalidSpacing(f64),

    #[error("Non-uniform sample spacing at index {index}: expected {expected}, found {found}")]
    NonUniformSpacing {
        index: usize,
        expected: f64,
        found: f64,
    },

    #[error("Got {coordinates} coordinates for {samples} samples")]
    CoordinateMismatch { coordinates: usize, samples: usize },

    #[error("Coordinate {0} is not a finite number")]
    NonFiniteCoordinate(usize),

    #[error("Sample {0} is not a finite number")]
    NonFiniteSample(usize),

    #[error("Spectrum has {spectrum} coefficients but {bins} frequency bins were given")]
    LengthMismatch { spectrum: usize, bins: usize },

    #[error("Spectrum length mismatch: expected {expected} coefficients, found {found}")]
    SpectrumLength { expected: usize, found: usize },

    #[error("Cutoff frequency must not be NaN (found: {0})")]
    InvalidCutoff(f64),

    #[error("dB reference must be finite and positive (found: {0})")]
    InvalidReference(f64),

    #[error("Band edges are inverted: low = {low}, high = {high}")]
    InvalidBand { low: f64, high: f64 },

    #[error("FFT processing failed: {0}")]
    Transform(String),
}

impl SpectralError {
    /// True for errors caused by caller-supplied arguments
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, SpectralError::Transform(_))
    }
}

/// Advisory conditions that are reported but never rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Filter keeps only the DC bin; reconstruction is the signal mean
    DcOnly,
}

pub type Result<T> = std::result::Result<T, SpectralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SpectralError::LengthMismatch { spectrum: 65, bins: 64 };
        assert_eq!(
            err.to_string(),
            "Spectrum has 65 coefficients but 64 frequency bins were given"
        );

        let err = SpectralError::InvalidSpacing(-0.5);
        assert!(err.to_string().contains("-0.5"));
    }

    #[test]
    fn test_invalid_input_taxonomy() {
        assert!(SpectralError::EmptySignal.is_invalid_input());
        assert!(SpectralError::InvalidCutoff(f64::NAN).is_invalid_input());
        assert!(!SpectralError::Transform("scratch".into()).is_invalid_input());
    }
}
