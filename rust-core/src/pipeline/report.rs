//! Filter run results and the collaborator that consumes them

use crate::error::Advisory;
use crate::spectrum::Spectrum;

/// Everything one Analyze -> Filter -> Reconstruct pass produced
#[derive(Debug, Clone, PartialEq)]
pub struct FilterReport {
    /// Input samples
    pub signal: Vec<f64>,

    /// Spectrum of the input
    pub spectrum: Spectrum,

    /// Spectrum after band filtering
    pub filtered: Spectrum,

    /// Samples recovered from the filtered spectrum
    pub reconstructed: Vec<f64>,

    /// Set when the filter left only the DC bin
    pub advisory: Option<Advisory>,
}

impl FilterReport {
    /// Frequency bins shared by both spectra
    pub fn frequencies(&self) -> &[f64] {
        self.spectrum.frequencies()
    }

    /// Largest absolute difference between input and reconstruction
    pub fn max_deviation(&self) -> f64 {
        self.signal
            .iter()
            .zip(self.reconstructed.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

/// Receiver of filter reports, e.g. a plotting front end
pub trait ReportSink {
    fn accept(&mut self, report: &FilterReport);
}

impl<F> ReportSink for F
where
    F: FnMut(&FilterReport),
{
    fn accept(&mut self, report: &FilterReport) {
        self(report)
    }
}
