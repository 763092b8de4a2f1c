//! Terminal front end: theme, widgets and the event loop

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::{run, App};
pub use theme::{ColorScale, Theme};
