//! Python bindings for the spectral filter processor

use pyo3::prelude::*;
use numpy::{Complex64, PyArray1, PyReadonlyArray1};
use crate::filters::BandFilter;
use crate::pipeline::{ProcessorConfig, SpectralProcessor};

/// Low-pass processor exposed to Python
#[pyclass(name = "LowPassProcessor")]
pub struct PyLowPassProcessor {
    processor: SpectralProcessor,
}

#[pymethods]
impl PyLowPassProcessor {
    /// Create a new low-pass processor
    ///
    /// Args:
    ///     dx: Sample spacing
    ///     cutoff: Highest frequency to keep (default: keep everything)
    #[new]
    #[pyo3(signature = (dx=1.0, cutoff=f64::INFINITY))]
    fn new(dx: f64, cutoff: f64) -> Self {
        Self {
            processor: SpectralProcessor::new(ProcessorConfig::lowpass(dx, cutoff)),
        }
    }

    /// Filter a signal
    ///
    /// Args:
    ///     signal: Real samples as numpy array
    ///
    /// Returns:
    ///     Tuple of (spectrum, filtered spectrum, frequency bins, reconstructed signal)
    #[allow(clippy::type_complexity)]
    fn process<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<(
        &'py PyArray1<Complex64>,
        &'py PyArray1<Complex64>,
        &'py PyArray1<f64>,
        &'py PyArray1<f64>,
    )> {
        let report = self.processor.process(signal.as_slice()?)?;
        let (coefficients, frequencies) = report.spectrum.into_parts();
        let (filtered, _) = report.filtered.into_parts();

        Ok((
            PyArray1::from_vec(py, coefficients),
            PyArray1::from_vec(py, filtered),
            PyArray1::from_vec(py, frequencies),
            PyArray1::from_vec(py, report.reconstructed),
        ))
    }

    /// Update configuration
    ///
    /// Args:
    ///     dx: New sample spacing
    ///     cutoff: New cutoff frequency
    #[pyo3(signature = (dx=None, cutoff=None))]
    fn update_config(&mut self, dx: Option<f64>, cutoff: Option<f64>) {
        let mut config = self.processor.config().clone();

        if let Some(dx) = dx {
            config.sample_spacing = dx;
        }
        if let Some(cutoff) = cutoff {
            config.filter = BandFilter::Lowpass { cutoff };
        }

        self.processor.update_config(config);
    }

    /// Set bypass state
    fn set_bypass(&mut self, bypass: bool) {
        self.processor.set_bypass(bypass);
    }

    /// Get current sample spacing
    fn get_dx(&self) -> f64 {
        self.processor.config().sample_spacing
    }
}
