//! Input/output helpers.
//!
//! - figure JSON read/write (`figure`)
//! - flat CSV export of every generated point (`export`)

pub mod export;
pub mod figure;

pub use export::*;
pub use figure::*;
