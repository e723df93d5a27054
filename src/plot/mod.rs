//! Figure rendering with Plotters.
//!
//! - `figure`: the 2x2 panel layout, shared by the image writer and the TUI

pub mod figure;

pub use figure::*;
