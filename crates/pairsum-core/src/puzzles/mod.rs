//! Small sequence and text algorithms.
//!
//! - [`golden`] - Fibonacci-like sequence whose consecutive ratios approach the golden ratio
//! - [`unique`] - First-unique and all-unique character scans
//! - [`tree`] - Text "christmas tree" rendering

pub mod golden;
pub mod tree;
pub mod unique;
