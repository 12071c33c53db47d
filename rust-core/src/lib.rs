//! Spectral Low-Pass - FFT-based frequency-domain filtering
//!
//! Analyze a uniformly sampled real signal into a normalized one-sided
//! spectrum, zero the bins above a cutoff, and reconstruct the samples.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod signal;
pub mod spectrum;
pub mod filters;
pub mod pipeline;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{Advisory, Result, SpectralError};
pub use filters::{filter_lowpass, BandFilter};
pub use pipeline::{FilterReport, ProcessorConfig, ReportSink, SpectralProcessor};
pub use signal::SampledSignal;
pub use spectrum::{analyze, reconstruct, Spectrum, SpectrumAnalyzer};
