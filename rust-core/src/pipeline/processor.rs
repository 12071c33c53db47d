//! Spectral filter processor
//!
//! Runs Analyze -> Filter -> Reconstruct with a cached FFT plan. The processor
//! holds no state between calls besides that plan and its configuration.

use super::report::{FilterReport, ReportSink};
use crate::error::Result;
use crate::filters::BandFilter;
use crate::signal::SampledSignal;
use crate::spectrum::reconstruct::reconstruct_with_engine;
use crate::spectrum::{AnalyzerConfig, SpectrumAnalyzer};

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Distance between consecutive samples (dx)
    pub sample_spacing: f64,

    /// Band filter applied between analysis and reconstruction
    pub filter: BandFilter,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            sample_spacing: 1.0,
            filter: BandFilter::default(),
        }
    }
}

impl ProcessorConfig {
    /// Low-pass configuration with the given spacing and cutoff
    pub fn lowpass(sample_spacing: f64, cutoff: f64) -> Self {
        Self {
            sample_spacing,
            filter: BandFilter::Lowpass { cutoff },
        }
    }
}

/// Spectral filter processor
pub struct SpectralProcessor {
    config: ProcessorConfig,
    analyzer: SpectrumAnalyzer,
    bypass: bool,
}

impl SpectralProcessor {
    /// Create new processor
    pub fn new(config: ProcessorConfig) -> Self {
        let analyzer = SpectrumAnalyzer::new(AnalyzerConfig {
            sample_spacing: config.sample_spacing,
        });

        Self {
            config,
            analyzer,
            bypass: false,
        }
    }

    /// Filter a signal and return the full report
    ///
    /// # Arguments
    /// * `signal` - Real samples spaced `config.sample_spacing` apart
    pub fn process(&mut self, signal: &[f64]) -> Result<FilterReport> {
        self.config.filter.validate()?;

        let spectrum = self.analyzer.analyze(signal)?;

        let (filtered, advisory) = if self.bypass {
            (spectrum.clone(), None)
        } else {
            let filtered = self.config.filter.apply(&spectrum)?;
            let advisory = self.config.filter.advisory(spectrum.frequencies());
            if let Some(advisory) = advisory {
                log::warn!(
                    "{:?} keeps only the DC bin ({:?}); reconstruction is the signal mean",
                    self.config.filter,
                    advisory
                );
            }
            (filtered, advisory)
        };

        let engine = self.analyzer.engine_for(signal.len())?;
        let reconstructed = reconstruct_with_engine(engine, filtered.coefficients())?;

        Ok(FilterReport {
            signal: signal.to_vec(),
            spectrum,
            filtered,
            reconstructed,
            advisory,
        })
    }

    /// Filter a [`SampledSignal`], adopting its spacing
    pub fn process_signal(&mut self, signal: &SampledSignal) -> Result<FilterReport> {
        if signal.spacing() != self.config.sample_spacing {
            let mut config = self.config.clone();
            config.sample_spacing = signal.spacing();
            self.update_config(config);
        }
        self.process(signal.samples())
    }

    /// Filter a signal and hand the report to `sink`
    pub fn process_into<S>(&mut self, signal: &[f64], sink: &mut S) -> Result<()>
    where
        S: ReportSink + ?Sized,
    {
        let report = self.process(signal)?;
        sink.accept(&report);
        Ok(())
    }

    /// Update configuration
    pub fn update_config(&mut self, config: ProcessorConfig) {
        self.analyzer.update_config(AnalyzerConfig {
            sample_spacing: config.sample_spacing,
        });
        self.config = config;
    }

    /// Replace the filter only
    pub fn set_filter(&mut self, filter: BandFilter) {
        self.config.filter = filter;
    }

    /// Set bypass state (reconstruct the unfiltered spectrum)
    pub fn set_bypass(&mut self, bypass: bool) {
        self.bypass = bypass;
    }

    pub fn is_bypassed(&self) -> bool {
        self.bypass
    }

    /// Get current configuration
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }
}

impl Default for SpectralProcessor {
    fn default() -> Self {
        Self::new(ProcessorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Advisory, SpectralError};
    use std::f64::consts::PI;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_single_tone_round_trip() {
        init_logger();
        let signal = SampledSignal::tones(128, 50.0, &[(0.2, 1.0)]).unwrap();
        assert_eq!(signal.spacing(), 50.0 / 128.0);

        let mut processor = SpectralProcessor::new(ProcessorConfig {
            sample_spacing: signal.spacing(),
            ..Default::default()
        });
        let report = processor.process(signal.samples()).unwrap();

        assert_eq!(report.filtered, report.spectrum);
        assert!(report.max_deviation() < 1e-9);
        assert_eq!(report.advisory, None);
    }

    #[test]
    fn test_two_tone_lowpass() {
        init_logger();
        let signal = SampledSignal::tones(256, 50.0, &[(0.2, 0.5), (0.5, 0.5)]).unwrap();
        let mut processor = SpectralProcessor::new(ProcessorConfig::lowpass(signal.spacing(), 0.4));

        let report = processor.process(signal.samples()).unwrap();

        // Only the 0.2 bin survives
        let kept: Vec<usize> = report
            .filtered
            .coefficients()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.norm() > 1e-8)
            .map(|(k, _)| k)
            .collect();
        assert_eq!(kept, vec![10]);
        assert!((report.frequencies()[10] - 0.2).abs() < 1e-12);
        assert!((report.spectrum.amplitudes()[25] - 0.5).abs() < 1e-9);

        // Reconstruction is the low tone alone
        let expected: Vec<f64> = signal
            .coordinates()
            .iter()
            .map(|&x| 0.5 * (2.0 * PI * 0.2 * x).sin())
            .collect();
        for (r, e) in report.reconstructed.iter().zip(expected.iter()) {
            assert!((r - e).abs() < 0.05 * 0.5);
        }
    }

    #[test]
    fn test_zero_signal() {
        let mut processor = SpectralProcessor::new(ProcessorConfig::lowpass(1.0, 0.1));
        let report = processor.process(&[0.0; 64]).unwrap();

        assert!(report.spectrum.coefficients().iter().all(|c| c.norm() == 0.0));
        assert_eq!(report.filtered, report.spectrum);
        assert!(report.reconstructed.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_dc_only_advisory() {
        init_logger();
        let signal: Vec<f64> = (0..32).map(|i| 2.0 + (i as f64 * 0.7).sin()).collect();
        let mean = signal.iter().sum::<f64>() / 32.0;

        let mut processor = SpectralProcessor::new(ProcessorConfig::lowpass(0.1, 0.0));
        let report = processor.process(&signal).unwrap();

        assert_eq!(report.advisory, Some(Advisory::DcOnly));
        assert!(report.reconstructed.iter().all(|&s| (s - mean).abs() < 1e-10));
    }

    #[test]
    fn test_bypass() {
        let signal: Vec<f64> = (0..50).map(|i| (i as f64 * 1.3).cos()).collect();
        let mut processor = SpectralProcessor::new(ProcessorConfig::lowpass(1.0, 0.0));

        processor.set_bypass(true);
        assert!(processor.is_bypassed());
        let report = processor.process(&signal).unwrap();

        assert_eq!(report.advisory, None);
        assert!(report.max_deviation() < 1e-10);
    }

    #[test]
    fn test_sinks() {
        let mut processor = SpectralProcessor::default();
        let mut collected: Vec<FilterReport> = Vec::new();
        let mut lengths = Vec::new();

        processor
            .process_into(&[1.0, 2.0, 3.0], &mut |r: &FilterReport| collected.push(r.clone()))
            .unwrap();
        processor
            .process_into(&[1.0; 8], &mut |r: &FilterReport| lengths.push(r.reconstructed.len()))
            .unwrap();

        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].spectrum.num_bins(), 2);
        assert_eq!(lengths, vec![8]);
    }

    #[test]
    fn test_config_updates() {
        let mut processor = SpectralProcessor::default();
        let signal = SampledSignal::new(vec![0.0, 1.0, 0.0, -1.0], 0.25).unwrap();

        let report = processor.process_signal(&signal).unwrap();
        assert_eq!(processor.config().sample_spacing, 0.25);
        assert!((report.frequencies()[1] - 1.0).abs() < 1e-12);

        processor.set_filter(BandFilter::Bandpass { low: 2.0, high: 1.0 });
        assert_eq!(
            processor.process(signal.samples()),
            Err(SpectralError::InvalidBand { low: 2.0, high: 1.0 })
        );
    }

    #[test]
    fn test_errors_propagate() {
        let mut processor = SpectralProcessor::default();
        assert_eq!(processor.process(&[]), Err(SpectralError::EmptySignal));

        processor.update_config(ProcessorConfig::lowpass(-1.0, 1.0));
        assert_eq!(processor.process(&[1.0]), Err(SpectralError::InvalidSpacing(-1.0)));
    }

    #[test]
    fn test_concurrent_free_functions() {
        use crate::filters::filter_lowpass;
        use crate::spectrum::{analyze, reconstruct_with_len};

        std::thread::scope(|scope| {
            let handles: Vec<_> = (1..=4)
                .map(|t| {
                    scope.spawn(move || {
                        let n = 16 * t;
                        let signal: Vec<f64> = (0..n).map(|i| (i as f64 * 0.3).sin()).collect();
                        let spectrum = analyze(&signal, 1.0).unwrap();
                        let kept = filter_lowpass(
                            spectrum.coefficients(),
                            spectrum.frequencies(),
                            f64::INFINITY,
                        )
                        .unwrap();
                        let restored = reconstruct_with_len(&kept, n).unwrap();
                        signal
                            .iter()
                            .zip(restored.iter())
                            .map(|(a, b)| (a - b).abs())
                            .fold(0.0, f64::max)
                    })
                })
                .collect();

            for handle in handles {
                assert!(handle.join().unwrap() < 1e-10);
            }
        });
    }
}
