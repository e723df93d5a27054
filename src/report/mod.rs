//! Reporting utilities: per-series final values and formatted terminal output.

pub mod format;

pub use format::*;
