//! Uniformly sampled real-valued signals
//!
//! Samples sit at `x_i = origin + i * dx` for `i = 0..N`. The right endpoint of
//! the domain is excluded so that the signal is treated as one period.

use crate::error::{Result, SpectralError};
use std::f64::consts::PI;

/// Relative tolerance used when validating explicit sample coordinates
pub const SPACING_RTOL: f64 = 1e-9;

/// Real-valued signal on a uniform grid
#[derive(Debug, Clone, PartialEq)]
pub struct SampledSignal {
    samples: Vec<f64>,
    origin: f64,
    spacing: f64,
}

impl SampledSignal {
    /// Create signal from samples and spacing, starting at x = 0
    pub fn new(samples: Vec<f64>, spacing: f64) -> Result<Self> {
        validate_samples(&samples)?;
        validate_spacing(spacing)?;

        Ok(Self {
            samples,
            origin: 0.0,
            spacing,
        })
    }

    /// Sample `f` at `n` points over `[0, domain_length)`
    ///
    /// # Arguments
    /// * `n` - Number of samples
    /// * `domain_length` - Length of the periodic domain (endpoint excluded)
    /// * `f` - Function of the coordinate x
    pub fn from_fn<F>(n: usize, domain_length: f64, f: F) -> Result<Self>
    where
        F: Fn(f64) -> f64,
    {
        if n == 0 {
            return Err(SpectralError::EmptySignal);
        }
        let spacing = domain_length / n as f64;
        validate_spacing(spacing)?;

        let samples = (0..n).map(|i| f(i as f64 * spacing)).collect();
        Self::new(samples, spacing)
    }

    /// Sum of sine tones `amplitude * sin(2π f x)` over `[0, domain_length)`
    ///
    /// # Arguments
    /// * `tones` - `(frequency, amplitude)` pairs in physical units
    pub fn tones(n: usize, domain_length: f64, tones: &[(f64, f64)]) -> Result<Self> {
        Self::from_fn(n, domain_length, |x| {
            tones
                .iter()
                .map(|&(freq, amp)| amp * (2.0 * PI * freq * x).sin())
                .sum()
        })
    }

    /// Build signal from explicit coordinates, checking that they are uniform
    ///
    /// At least two coordinates are needed to derive the spacing.
    pub fn from_coordinates(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(SpectralError::CoordinateMismatch {
                coordinates: x.len(),
                samples: y.len(),
            });
        }
        if x.is_empty() {
            return Err(SpectralError::EmptySignal);
        }
        if x.len() < 2 {
            return Err(SpectralError::InvalidSpacing(f64::NAN));
        }
        if let Some(index) = x.iter().position(|c| !c.is_finite()) {
            return Err(SpectralError::NonFiniteCoordinate(index));
        }

        let spacing = x[1] - x[0];
        validate_spacing(spacing)?;

        // Coordinate differences lose precision proportional to their magnitude
        let magnitude = x[0].abs().max(x[x.len() - 1].abs());
        let tolerance = SPACING_RTOL * spacing + 4.0 * f64::EPSILON * magnitude;
        for (index, pair) in x.windows(2).enumerate() {
            let step = pair[1] - pair[0];
            // Negated so a NaN step is rejected
            if !((step - spacing).abs() <= tolerance) {
                return Err(SpectralError::NonUniformSpacing {
                    index: index + 1,
                    expected: spacing,
                    found: step,
                });
            }
        }

        let mut signal = Self::new(y.to_vec(), spacing)?;
        signal.origin = x[0];
        Ok(signal)
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn origin(&self) -> f64 {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample coordinates `origin + i * dx`
    pub fn coordinates(&self) -> Vec<f64> {
        (0..self.samples.len())
            .map(|i| self.origin + i as f64 * self.spacing)
            .collect()
    }

    /// Length of the sampled domain: `(max(x) - min(x)) + dx`, i.e. `N * dx`
    pub fn domain_length(&self) -> f64 {
        let last = (self.samples.len() - 1) as f64 * self.spacing;
        last + self.spacing
    }

    /// Arithmetic mean of the samples
    pub fn mean(&self) -> f64 {
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }
}

pub(crate) fn validate_samples(samples: &[f64]) -> Result<()> {
    if samples.is_empty() {
        return Err(SpectralError::EmptySignal);
    }
    if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
        return Err(SpectralError::NonFiniteSample(index));
    }
    Ok(())
}

pub(crate) fn validate_spacing(spacing: f64) -> Result<()> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(SpectralError::InvalidSpacing(spacing));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_excludes_endpoint() {
        let signal = SampledSignal::from_fn(128, 50.0, |x| x).unwrap();

        assert_eq!(signal.len(), 128);
        assert_eq!(signal.spacing(), 50.0 / 128.0);

        // Last sample is one spacing short of the domain end
        let last = *signal.samples().last().unwrap();
        assert!((last - (50.0 - 50.0 / 128.0)).abs() < 1e-12);
        assert!((signal.domain_length() - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_tones() {
        let signal = SampledSignal::tones(256, 50.0, &[(0.2, 0.5), (0.5, 0.5)]).unwrap();
        let x = signal.coordinates();

        for (i, &s) in signal.samples().iter().enumerate() {
            let expected = 0.5 * ((2.0 * PI * 0.2 * x[i]).sin() + (2.0 * PI * 0.5 * x[i]).sin());
            assert!((s - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(SampledSignal::new(vec![], 1.0), Err(SpectralError::EmptySignal));
        assert_eq!(
            SampledSignal::new(vec![1.0], 0.0),
            Err(SpectralError::InvalidSpacing(0.0))
        );
        assert!(SampledSignal::new(vec![1.0], f64::INFINITY).is_err());
        assert_eq!(
            SampledSignal::new(vec![0.0, f64::NAN], 1.0),
            Err(SpectralError::NonFiniteSample(1))
        );
    }

    #[test]
    fn test_from_coordinates() {
        let x: Vec<f64> = (0..10).map(|i| 2.0 + i as f64 * 0.25).collect();
        let y = vec![1.0; 10];
        let signal = SampledSignal::from_coordinates(&x, &y).unwrap();

        assert_eq!(signal.spacing(), 0.25);
        assert_eq!(signal.origin(), 2.0);
        assert!((signal.domain_length() - 2.5).abs() < 1e-12);
        assert_eq!(signal.coordinates(), x);
    }

    #[test]
    fn test_from_coordinates_non_uniform() {
        let x = [0.0, 1.0, 2.0, 3.5, 4.5];
        let y = [0.0; 5];

        match SampledSignal::from_coordinates(&x, &y) {
            Err(SpectralError::NonUniformSpacing { index, .. }) => assert_eq!(index, 3),
            other => panic!("expected non-uniform spacing error, got {:?}", other),
        }

        // Decreasing coordinates give a negative spacing
        assert!(SampledSignal::from_coordinates(&[1.0, 0.0], &[0.0, 0.0]).is_err());
        // A single coordinate cannot define a spacing
        assert!(SampledSignal::from_coordinates(&[0.0], &[1.0]).is_err());
        // A huge but finite coordinate breaks the grid
        assert!(SampledSignal::from_coordinates(&[0.0, 1.0, 2.0, 1e300], &[1.0; 4]).is_err());
        assert_eq!(
            SampledSignal::from_coordinates(&[0.0, 1.0], &[1.0]),
            Err(SpectralError::CoordinateMismatch { coordinates: 2, samples: 1 })
        );
    }

    #[test]
    fn test_mean() {
        let signal = SampledSignal::new(vec![1.0, 2.0, 3.0, 6.0], 0.1).unwrap();
        assert!((signal.mean() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_coordinates_non_finite() {
        assert_eq!(
            SampledSignal::from_coordinates(&[0.0, 1.0, f64::NAN, 3.0], &[1.0; 4]),
            Err(SpectralError::NonFiniteCoordinate(2))
        );
        assert_eq!(
            SampledSignal::from_coordinates(&[0.0, 1.0, 2.0, 7.0, f64::INFINITY], &[1.0; 5]),
            Err(SpectralError::NonFiniteCoordinate(4))
        );
        assert_eq!(
            SampledSignal::from_coordinates(&[f64::NEG_INFINITY, 0.0], &[1.0; 2]),
            Err(SpectralError::NonFiniteCoordinate(0))
        );
    }
}
