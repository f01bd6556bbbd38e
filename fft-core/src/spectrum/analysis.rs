//! High-level spectrum analysis pipeline
//!
//! Centers the input (mean removal), zero-pads to a power of two, runs the
//! forward FFT and reduces the result to a magnitude spectrum and a report
//! of significant bins.

use super::fft;
use num_complex::Complex64;
use std::fmt::Write;

/// Magnitudes at or below this value are considered noise and left out
/// of the report.
pub const DEFAULT_THRESHOLD: f64 = 0.001;

/// Hard ceiling on the number of input samples (reference sizing).
pub const DEFAULT_MAX_POINTS: usize = 1024;

/// Spectrum analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Maximum number of input samples consumed from a file
    pub max_points: usize,

    /// Magnitude threshold for a bin to appear in the report
    pub threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// A reported frequency bin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Bin index (1..fft_size/2)
    pub index: usize,

    /// Normalized magnitude, sqrt(re^2 + im^2) / fft_size
    pub magnitude: f64,
}

/// Result of a single analysis run
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Normalized magnitude per bin, fft_size entries
    magnitudes: Vec<f64>,

    /// Transform length (power of two)
    fft_size: usize,
}

impl Spectrum {
    /// Transform length the input was padded to
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Normalized magnitude of every bin, DC included
    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    /// Bins 1..fft_size/2 whose magnitude is strictly above `threshold`.
    ///
    /// Bin 0 (DC) and the upper mirror half are excluded; for real input
    /// the bins above Nyquist carry no extra information.
    pub fn significant(&self, threshold: f64) -> Vec<Bin> {
        (1..self.fft_size / 2)
            .filter_map(|index| {
                let magnitude = self.magnitudes[index];
                (magnitude > threshold).then_some(Bin { index, magnitude })
            })
            .collect()
    }

    /// Render the analysis report: header, column names, one line per
    /// significant bin with the magnitude to six decimal places.
    pub fn render_report(&self, threshold: f64) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "--- FFT Analysis Results ({} points) ---", self.fft_size);
        let _ = writeln!(out, "bin\tmagnitude");
        for bin in self.significant(threshold) {
            let _ = writeln!(out, "{}\t{:.6}", bin.index, bin.magnitude);
        }
        out
    }
}

/// Offline spectrum analyzer
#[derive(Debug, Clone, Default)]
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a real-valued sequence and return its magnitude spectrum.
    ///
    /// The mean is removed before the transform so the DC bin reflects
    /// only residual rounding, and the centered sequence is zero-padded
    /// to the next power of two. `samples` must be non-empty.
    pub fn analyze(&self, samples: &[f64]) -> Spectrum {
        debug_assert!(!samples.is_empty(), "analyze requires at least one sample");

        let fft_size = samples.len().next_power_of_two();
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;

        let mut buffer: Vec<Complex64> = Vec::with_capacity(fft_size);
        buffer.extend(samples.iter().map(|&s| Complex64::new(s - mean, 0.0)));
        buffer.resize(fft_size, Complex64::new(0.0, 0.0));

        fft::forward(&mut buffer);

        let magnitudes = buffer.iter().map(|c| c.norm() / fft_size as f64).collect();

        Spectrum { magnitudes, fft_size }
    }
}
