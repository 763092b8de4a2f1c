//! Aggregator turning sparse data points into a dense, normalized grid

use chrono::NaiveDate;
use tracing::debug;

use crate::services::CoordinateMapper;
use crate::types::{DataPoint, ViewGrid};

/// Aggregator for building the view grid
pub struct Aggregator;

impl Aggregator {
    /// Sum every in-window point into its cell, then min-max normalize.
    /// Points outside the visible window and non-finite values are dropped.
    /// Sums saturate at the largest finite `f64`.
    pub fn aggregate(points: &[DataPoint], reference: NaiveDate, weeks: usize) -> ViewGrid {
        let mut grid = ViewGrid::empty(weeks);
        let mut dropped = 0usize;

        for point in points {
            let coord = CoordinateMapper::date_to_coordinate(point.date, reference, weeks);
            match grid.cell_mut(coord) {
                Some(cell) if point.value.is_finite() => {
                    cell.actual = (cell.actual + point.value).clamp(f64::MIN, f64::MAX);
                }
                _ => dropped += 1,
            }
        }

        debug!(
            points = points.len(),
            dropped,
            weeks,
            %reference,
            "aggregated data points"
        );

        Self::normalize(&mut grid);
        grid
    }

    /// Rescale `actual` to [0, 1] over the whole grid, empty cells included.
    /// A flat grid (max == min) normalizes to 0 everywhere.
    pub fn normalize(grid: &mut ViewGrid) {
        let Some((min, max)) = Self::range(grid) else {
            return;
        };

        // Halve everything when the span itself overflows
        let (min, max, scale) = if (max - min).is_finite() {
            (min, max, 1.0)
        } else {
            (min / 2.0, max / 2.0, 0.5)
        };
        let span = max - min;
        for cell in grid.iter_mut() {
            let normalized = if span > 0.0 {
                (cell.actual * scale - min) / span
            } else {
                0.0
            };
            cell.normalized = if normalized.is_nan() {
                0.0
            } else {
                normalized.clamp(0.0, 1.0)
            };
        }
    }

    /// (min, max) of `actual`, `None` for a zero-width grid
    pub fn range(grid: &ViewGrid) -> Option<(f64, f64)> {
        grid.iter().map(|(_, cell)| cell.actual).fold(None, |acc, v| {
            Some(match acc {
                None => (v, v),
                Some((min, max)) => (min.min(v), max.max(v)),
            })
        })
    }
}
