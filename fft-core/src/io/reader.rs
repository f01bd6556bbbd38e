//! Numeric sequence reader
//!
//! Reads one value per line from a plain-text file, up to a fixed capacity.
//! Parsing is lenient: the leading numeric prefix of a line is taken, and a
//! line with no numeric prefix (blank lines included) yields 0.0. Non-blank
//! lines that fall back to 0.0 are logged, since they silently inject zeros
//! into the sequence.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read up to `max` samples from `path`, one per line.
///
/// Every line consumed contributes a sample; lines without a numeric
/// prefix contribute 0.0. Reading stops at end of file or once `max`
/// samples have been collected.
pub fn read_samples(path: &Path, max: usize) -> Result<Vec<f64>, ReadError> {
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut samples = Vec::new();
    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        if samples.len() >= max {
            break;
        }
        let line = line.map_err(|source| ReadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let value = match parse_leading_f64(&line) {
            Some(v) => v,
            None => {
                if !line.trim().is_empty() {
                    tracing::warn!(line = line_no + 1, content = %line.trim(), "non-numeric line recorded as 0.0");
                }
                0.0
            }
        };
        samples.push(value);
    }

    Ok(samples)
}

/// Parse the leading numeric prefix of a line, C `atof` style: optional
/// leading whitespace and sign, digits with an optional fractional part,
/// optional exponent. Returns `None` when no digits are present.
fn parse_leading_f64(line: &str) -> Option<f64> {
    let s = line.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts if at least one digit follows it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
