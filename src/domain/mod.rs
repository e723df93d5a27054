//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - generator inputs/outputs (`CurveParams`, `CurveSet`)
//! - the literal task catalog (`TaskSpec`, `Tier`, `Method`, `TASKS`)
//! - the renderable figure model (`Series`, `Panel`, `Figure`)

pub mod catalog;
pub mod types;

pub use catalog::*;
pub use types::*;
