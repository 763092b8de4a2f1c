//! Type definitions for heatcal

mod command;
mod error;
mod grid;

pub use command::*;
pub use error::*;
pub use grid::*;
