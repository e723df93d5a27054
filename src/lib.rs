//! `rl-curves` library crate.
//!
//! Generates synthetic learning curves for four RL benchmark tasks and renders
//! them as a 2x2 figure. The binary (`rlc`) is a thin wrapper around this
//! library so that:
//!
//! - the generator and figure pipeline are testable without spawning processes
//! - the file renderer and the terminal viewer share one data model

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod plot;
pub mod report;
pub mod tui;
