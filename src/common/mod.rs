//! Common building blocks and utilities.

mod f64_array_ext;
mod sample_window;

pub use f64_array_ext::F64ArrayExt;
pub use sample_window::{InsufficientHistory, SampleWindow};
