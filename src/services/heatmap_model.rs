//! Heatmap model: data points, derived grid and selection in one unit

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::services::{Aggregator, CoordinateMapper, NavigationState};
use crate::types::{
    Command, DataPoint, GridCoordinate, HeatcalError, Result, ViewCell, ViewGrid, DAYS_PER_WEEK,
};

/// Value recorded by [`Command::Commit`]
pub const COMMIT_VALUE: f64 = 1.0;

/// Stateful heatmap held by the host for the lifetime of a session
#[derive(Debug, Clone)]
pub struct HeatmapModel {
    data_points: Vec<DataPoint>,
    view: ViewGrid,
    selection: NavigationState,
    weeks: usize,
    reference_date: NaiveDate,
}

/// Render-ready snapshot of the model
#[derive(Debug, Clone, Copy)]
pub struct HeatmapView<'a> {
    pub grid: &'a ViewGrid,
    pub selection: GridCoordinate,
    pub reference_date: NaiveDate,
    pub weeks: usize,
}

/// Details of the selected day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedDay {
    pub date: NaiveDate,
    pub cell: ViewCell,
}

impl HeatmapModel {
    /// Build the model with the cursor on `reference_date`.
    /// Fails when `weeks` is zero or when the oldest cell falls before the
    /// first date chrono can represent.
    pub fn new(data_points: Vec<DataPoint>, reference_date: NaiveDate, weeks: usize) -> Result<Self> {
        let selection = NavigationState::new(reference_date, weeks)?;
        if CoordinateMapper::coordinate_to_date(GridCoordinate::new(0, 0), reference_date, weeks).is_none() {
            return Err(HeatcalError::DateOutOfRange(format!(
                "{} weeks ending {}",
                weeks, reference_date
            )));
        }

        let outside = data_points
            .iter()
            .filter(|p| !CoordinateMapper::date_to_coordinate(p.date, reference_date, weeks).in_bounds(weeks))
            .count();
        if outside > 0 {
            warn!(outside, weeks, %reference_date, "skipping data points outside the visible weeks");
        }

        let view = Aggregator::aggregate(&data_points, reference_date, weeks);
        Ok(Self {
            data_points,
            view,
            selection,
            weeks,
            reference_date,
        })
    }

    /// Apply one command. Movement only touches the selection; `Commit`
    /// appends a point on the selected day and rebuilds the grid.
    pub fn handle_command(&mut self, command: Command) {
        if command.is_movement() {
            self.selection = self.selection.apply(command);
            return;
        }

        let date = self.selected_date();
        self.data_points.push(DataPoint::new(date, COMMIT_VALUE));
        self.view = Aggregator::aggregate(&self.data_points, self.reference_date, self.weeks);
        info!(
            %date,
            total = self.selected_day().cell.actual,
            "entry added"
        );
    }

    /// Consuming variant of [`HeatmapModel::handle_command`]
    pub fn apply(mut self, command: Command) -> Self {
        self.handle_command(command);
        self
    }

    /// Snapshot for the renderer
    pub fn current_view(&self) -> HeatmapView<'_> {
        HeatmapView {
            grid: &self.view,
            selection: self.selection.coordinate(),
            reference_date: self.reference_date,
            weeks: self.weeks,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        // Cells from the oldest one up to the reference date all have dates,
        // checked in `new`
        CoordinateMapper::coordinate_to_date(self.selection.coordinate(), self.reference_date, self.weeks)
            .unwrap_or(self.reference_date)
    }

    pub fn selected_day(&self) -> SelectedDay {
        SelectedDay {
            date: self.selected_date(),
            cell: self
                .view
                .cell(self.selection.coordinate())
                .copied()
                .unwrap_or_default(),
        }
    }

    pub fn data_points(&self) -> &[DataPoint] {
        &self.data_points
    }

    pub fn weeks(&self) -> usize {
        self.weeks
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }
}

impl HeatmapView<'_> {
    /// Calendar date shown at `coord`
    pub fn date_at(&self, coord: GridCoordinate) -> Option<NaiveDate> {
        CoordinateMapper::coordinate_to_date(coord, self.reference_date, self.weeks)
    }

    /// Whether `coord` lies after the reference date
    pub fn is_future(&self, coord: GridCoordinate) -> bool {
        let end = CoordinateMapper::date_to_coordinate(self.reference_date, self.reference_date, self.weeks);
        let days_after = (coord.column as i128 - end.column as i128) * DAYS_PER_WEEK as i128
            + (coord.row as i128 - end.row as i128);
        days_after > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_weeks() {
        let err = HeatmapModel::new(vec![], date(2023, 3, 4), 0).unwrap_err();
        assert!(matches!(err, HeatcalError::InvalidWeeks(0)));
    }

    #[test]
    fn test_single_point_scenario() {
        let reference = date(2023, 3, 4);
        let model = HeatmapModel::new(vec![DataPoint::new(reference, 1.0)], reference, 12).unwrap();
        let view = model.current_view();

        assert_eq!(view.date_at(view.selection), Some(reference));
        let selected = view.grid.cell(view.selection).unwrap();
        assert_eq!(selected.actual, 1.0);
        assert_eq!(selected.normalized, 1.0);

        for (coord, cell) in view.grid.iter() {
            if coord != view.selection {
                assert_eq!(cell.actual, 0.0);
                assert_eq!(cell.normalized, 0.0);
            }
        }
    }

    #[test]
    fn test_commit_adds_one_point() {
        let reference = date(2023, 3, 1);
        let mut model = HeatmapModel::new(vec![], reference, 12).unwrap();
        model.handle_command(Command::Left);
        let before = model.selected_day().cell.actual;

        model.handle_command(Command::Commit);

        assert_eq!(model.data_points().len(), 1);
        assert_eq!(model.data_points()[0].date, date(2023, 2, 22));
        assert_eq!(model.selected_day().cell.actual, before + COMMIT_VALUE);
        assert_eq!(model.current_view().selection, GridCoordinate::new(10, 3));
    }

    #[test]
    fn test_commit_twice_accumulates() {
        let reference = date(2023, 3, 4);
        let model = HeatmapModel::new(vec![DataPoint::new(date(2023, 3, 1), 5.0)], reference, 4)
            .unwrap()
            .apply(Command::Commit)
            .apply(Command::Commit);

        let selected = model.selected_day();
        assert_eq!(selected.date, reference);
        assert_eq!(selected.cell.actual, 2.0);
        assert_eq!(selected.cell.normalized, 0.4);
        assert_eq!(model.data_points().len(), 3);
    }

    #[test]
    fn test_movement_keeps_data() {
        let reference = date(2023, 3, 4);
        let model = HeatmapModel::new(vec![DataPoint::new(reference, 2.0)], reference, 12)
            .unwrap()
            .apply(Command::Up)
            .apply(Command::Left);

        assert_eq!(model.selected_date(), date(2023, 2, 24));
        assert_eq!(model.data_points().len(), 1);
        assert_eq!(model.current_view().grid.total(), 2.0);
    }

    #[test]
    fn test_is_future() {
        let reference = date(2023, 3, 1); // Wednesday
        let model = HeatmapModel::new(vec![], reference, 12).unwrap();
        let view = model.current_view();

        assert!(!view.is_future(GridCoordinate::new(11, 3)));
        assert!(view.is_future(GridCoordinate::new(11, 4)));
        assert!(!view.is_future(GridCoordinate::new(10, 6)));
    }

    #[test]
    fn test_is_future_at_last_representable_day() {
        let model = HeatmapModel::new(vec![], NaiveDate::MAX, 4).unwrap();
        let view = model.current_view();
        let end = view.selection;

        assert!(!view.is_future(end));
        assert!(view.is_future(GridCoordinate::new(end.column, end.row + 1)));
        assert_eq!(view.date_at(GridCoordinate::new(end.column, end.row + 1)), None);
        assert_eq!(model.selected_date(), NaiveDate::MAX);
    }

    #[test]
    fn test_new_rejects_grid_before_min_date() {
        let err = HeatmapModel::new(vec![], NaiveDate::MIN, 4).unwrap_err();
        assert!(matches!(err, HeatcalError::DateOutOfRange(_)));
    }

    #[test]
    fn test_extreme_data_points_are_skipped() {
        let reference = date(2023, 3, 4);
        let points = vec![
            DataPoint::new(NaiveDate::MIN, 1.0),
            DataPoint::new(NaiveDate::MAX, 1.0),
            DataPoint::new(reference, 2.0),
        ];
        let model = HeatmapModel::new(points, reference, 12).unwrap();

        assert_eq!(model.current_view().grid.total(), 2.0);
        assert_eq!(model.selected_day().cell.normalized, 1.0);
    }
}
