//! TUI widgets

pub mod day_detail;
pub mod heatmap;
pub mod help;
