//! Sampled signal model

pub mod sampled;

pub use sampled::{SampledSignal, SPACING_RTOL};
