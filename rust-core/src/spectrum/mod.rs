//! Spectral analysis and reconstruction with real FFTs

pub mod fft;
pub mod analysis;
pub mod reconstruct;

pub use fft::FftEngine;
pub use analysis::{analyze, analyze_sampled, analyze_signal, frequency_bins, AnalyzerConfig, Spectrum, SpectrumAnalyzer};
pub use reconstruct::{reconstruct, reconstruct_with_len};
