//! Frequency-domain band filtering

pub mod band;

pub use band::{filter_lowpass, is_degenerate, BandFilter};
