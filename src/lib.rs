//! Terminal contribution heatmap
//!
//! The core maps calendar dates onto a weeks x weekdays grid, aggregates
//! sparse data points into normalized cells and moves a selection cursor
//! that never leaves the visible history. The `tui` module renders it with
//! ratatui and `cli` wires everything to the command line.

pub mod cli;
pub mod services;
pub mod tui;
pub mod types;

pub use services::{HeatmapModel, HeatmapView};
pub use types::{Command, DataPoint, GridCoordinate, HeatcalError, ViewCell, ViewGrid};
