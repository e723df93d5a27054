//! Mathematical utilities for the learning-curve shapes.

pub mod saturation;

pub use saturation::*;
