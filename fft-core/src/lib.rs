//! Interval Spectrum - Offline FFT Analysis Core
//!
//! Magnitude-spectrum analysis for real-valued numeric sequences
//! (e.g. event timing intervals) read from plain-text files.

pub mod io;
pub mod spectrum;

pub use io::{read_samples, ReadError};
pub use spectrum::{AnalyzerConfig, Spectrum, SpectrumAnalyzer};
