//! Services for date mapping, aggregation and navigation

pub mod aggregator;
pub mod coordinates;
pub mod data_loader;
pub mod heatmap_model;
pub mod navigation;

pub use aggregator::Aggregator;
pub use coordinates::CoordinateMapper;
pub use data_loader::DataLoader;
pub use heatmap_model::{HeatmapModel, HeatmapView, SelectedDay, COMMIT_VALUE};
pub use navigation::NavigationState;
