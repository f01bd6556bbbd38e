//! File input for numeric sequences

pub mod reader;

pub use reader::{read_samples, ReadError};
