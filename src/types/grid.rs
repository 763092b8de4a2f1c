//! Grid types shared by the mapper, aggregator and renderer

use chrono::NaiveDate;
use serde::Serialize;

/// Number of rows in the grid (Sunday..=Saturday)
pub const DAYS_PER_WEEK: usize = 7;

/// A single (date, value) sample. Samples sharing a date are summed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl DataPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Position of a day in the grid.
///
/// `column` counts weeks from the oldest visible week (0) to the week of the
/// reference date (`weeks - 1`). `row` is the weekday, 0 = Sunday.
/// Coordinates produced by the mapper are not clamped, so either component
/// may fall outside the grid; use [`GridCoordinate::in_bounds`] before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridCoordinate {
    pub column: i64,
    pub row: i64,
}

impl GridCoordinate {
    pub fn new(column: i64, row: i64) -> Self {
        Self { column, row }
    }

    /// Whether this coordinate addresses a cell of a `weeks`-wide grid
    pub fn in_bounds(self, weeks: usize) -> bool {
        (0..weeks as i64).contains(&self.column) && (0..DAYS_PER_WEEK as i64).contains(&self.row)
    }
}

/// Aggregated value of one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ViewCell {
    /// Sum of all samples landing on this day
    pub actual: f64,
    /// `actual` rescaled to [0, 1] over the whole grid
    pub normalized: f64,
}

/// Dense `weeks x 7` grid of aggregated cells, stored column-major
#[derive(Debug, Clone, PartialEq)]
pub struct ViewGrid {
    columns: Vec<[ViewCell; DAYS_PER_WEEK]>,
}

impl ViewGrid {
    /// Empty grid with every cell at zero
    pub fn empty(weeks: usize) -> Self {
        Self {
            columns: vec![[ViewCell::default(); DAYS_PER_WEEK]; weeks],
        }
    }

    pub fn weeks(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[[ViewCell; DAYS_PER_WEEK]] {
        &self.columns
    }

    /// Cell at `coord`, `None` when out of bounds
    pub fn cell(&self, coord: GridCoordinate) -> Option<&ViewCell> {
        if !coord.in_bounds(self.weeks()) {
            return None;
        }
        self.columns
            .get(coord.column as usize)
            .map(|column| &column[coord.row as usize])
    }

    pub(crate) fn cell_mut(&mut self, coord: GridCoordinate) -> Option<&mut ViewCell> {
        if !coord.in_bounds(self.weeks()) {
            return None;
        }
        self.columns
            .get_mut(coord.column as usize)
            .map(|column| &mut column[coord.row as usize])
    }

    /// Iterate every cell with its coordinate, column by column
    pub fn iter(&self) -> impl Iterator<Item = (GridCoordinate, &ViewCell)> {
        self.columns.iter().enumerate().flat_map(|(col, days)| {
            days.iter()
                .enumerate()
                .map(move |(row, cell)| (GridCoordinate::new(col as i64, row as i64), cell))
        })
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut ViewCell> {
        self.columns.iter_mut().flat_map(|days| days.iter_mut())
    }

    /// Sum of `actual` over every cell
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, cell)| cell.actual).sum()
    }
}
