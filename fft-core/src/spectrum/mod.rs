//! Spectral analysis with FFT

pub mod analysis;
pub mod fft;

pub use analysis::{AnalyzerConfig, Spectrum, SpectrumAnalyzer};
pub use fft::transform;
