//! Synthetic learning-curve generation.

pub mod generate;

pub use generate::*;
