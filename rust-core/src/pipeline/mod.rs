//! Analyze -> Filter -> Reconstruct pipeline

pub mod processor;
pub mod report;

pub use processor::{ProcessorConfig, SpectralProcessor};
pub use report::{FilterReport, ReportSink};
