//! Selection cursor state machine
//!
//! The cursor lives in `[0, weeks) x [0, 7)` and never moves past the
//! reference date. Moves that would break either rule are no-ops.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::services::CoordinateMapper;
use crate::types::{Command, GridCoordinate, HeatcalError, Result, DAYS_PER_WEEK};

const LAST_ROW: i64 = DAYS_PER_WEEK as i64 - 1;

/// Current selection and the bounds it is clamped to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    coordinate: GridCoordinate,
    weeks: usize,
    /// Row of the reference date in the last column
    end_row: i64,
}

impl NavigationState {
    /// Cursor placed on the reference date
    pub fn new(reference: NaiveDate, weeks: usize) -> Result<Self> {
        if weeks < 1 {
            return Err(HeatcalError::InvalidWeeks(weeks));
        }
        Ok(Self {
            coordinate: CoordinateMapper::date_to_coordinate(reference, reference, weeks),
            weeks,
            end_row: reference.weekday().num_days_from_sunday() as i64,
        })
    }

    pub fn coordinate(&self) -> GridCoordinate {
        self.coordinate
    }

    pub fn weeks(&self) -> usize {
        self.weeks
    }

    /// Coordinate of the reference date
    pub fn end_coordinate(&self) -> GridCoordinate {
        GridCoordinate::new(self.last_column(), self.end_row)
    }

    /// Whether `coord` is a selectable cell (inside the grid, not in the future)
    pub fn is_selectable(&self, coord: GridCoordinate) -> bool {
        coord.in_bounds(self.weeks) && (coord.column < self.last_column() || coord.row <= self.end_row)
    }

    fn last_column(&self) -> i64 {
        self.weeks as i64 - 1
    }

    /// Apply a command and return the resulting state. `Commit` leaves the
    /// cursor where it is.
    pub fn apply(self, command: Command) -> Self {
        let GridCoordinate { column, row } = self.coordinate;
        let last = self.last_column();

        let next = match command {
            Command::Up if row > 0 => GridCoordinate::new(column, row - 1),
            // Sunday wraps to the previous week's Saturday
            Command::Up if column > 0 => GridCoordinate::new(column - 1, LAST_ROW),
            Command::Down if row < LAST_ROW && (column != last || row < self.end_row) => {
                GridCoordinate::new(column, row + 1)
            }
            // Saturday wraps to the next week's Sunday
            Command::Down if row == LAST_ROW && column != last => GridCoordinate::new(column + 1, 0),
            Command::Right if column < last - 1 || (column == last - 1 && row <= self.end_row) => {
                GridCoordinate::new(column + 1, row)
            }
            Command::Left if column > 0 => GridCoordinate::new(column - 1, row),
            _ => self.coordinate,
        };

        if next != self.coordinate {
            debug!(?command, column = next.column, row = next.row, "selection moved");
        }

        Self {
            coordinate: next,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(state: NavigationState, column: i64, row: i64) -> NavigationState {
        NavigationState {
            coordinate: GridCoordinate::new(column, row),
            ..state
        }
    }

    /// Wednesday reference: end row 3
    fn wednesday_state() -> NavigationState {
        NavigationState::new(date(2023, 3, 1), 12).unwrap()
    }

    // ========== construction tests ==========

    #[test]
    fn test_new_selects_reference_date() {
        let state = NavigationState::new(date(2023, 3, 4), 12).unwrap();
        assert_eq!(state.coordinate(), GridCoordinate::new(11, 6));
        assert_eq!(state.end_coordinate(), GridCoordinate::new(11, 6));
    }

    #[test]
    fn test_new_rejects_zero_weeks() {
        let err = NavigationState::new(date(2023, 3, 4), 0).unwrap_err();
        assert!(matches!(err, HeatcalError::InvalidWeeks(0)));
    }

    // ========== up tests ==========

    #[test]
    fn test_up_moves_to_previous_day() {
        let state = wednesday_state().apply(Command::Up);
        assert_eq!(state.coordinate(), GridCoordinate::new(11, 2));
    }

    #[test]
    fn test_up_wraps_to_previous_saturday() {
        let state = at(wednesday_state(), 5, 0).apply(Command::Up);
        assert_eq!(state.coordinate(), GridCoordinate::new(4, 6));
    }

    #[test]
    fn test_up_at_oldest_cell_is_noop() {
        let state = at(wednesday_state(), 0, 0).apply(Command::Up);
        assert_eq!(state.coordinate(), GridCoordinate::new(0, 0));
    }

    // ========== down tests ==========

    #[test]
    fn test_down_blocked_at_reference_date() {
        let state = wednesday_state().apply(Command::Down);
        assert_eq!(state.coordinate(), GridCoordinate::new(11, 3));
    }

    #[test]
    fn test_down_moves_within_past_week() {
        let state = at(wednesday_state(), 4, 2).apply(Command::Down);
        assert_eq!(state.coordinate(), GridCoordinate::new(4, 3));
    }

    #[test]
    fn test_down_wraps_to_next_sunday() {
        let state = at(wednesday_state(), 4, 6).apply(Command::Down);
        assert_eq!(state.coordinate(), GridCoordinate::new(5, 0));
    }

    #[test]
    fn test_down_wraps_into_last_column() {
        let state = at(wednesday_state(), 10, 6).apply(Command::Down);
        assert_eq!(state.coordinate(), GridCoordinate::new(11, 0));
    }

    #[test]
    fn test_down_on_saturday_reference_is_noop() {
        let state = NavigationState::new(date(2023, 3, 4), 12).unwrap().apply(Command::Down);
        assert_eq!(state.coordinate(), GridCoordinate::new(11, 6));
    }

    // ========== right tests ==========

    #[test]
    fn test_right_moves_one_week() {
        let state = at(wednesday_state(), 3, 5).apply(Command::Right);
        assert_eq!(state.coordinate(), GridCoordinate::new(4, 5));
    }

    #[test]
    fn test_right_into_last_column_allowed_up_to_end_row() {
        let state = at(wednesday_state(), 10, 3).apply(Command::Right);
        assert_eq!(state.coordinate(), GridCoordinate::new(11, 3));
    }

    #[test]
    fn test_right_into_future_cell_blocked() {
        let state = at(wednesday_state(), 10, 4).apply(Command::Right);
        assert_eq!(state.coordinate(), GridCoordinate::new(10, 4));
    }

    #[test]
    fn test_right_from_last_column_is_noop() {
        let state = at(wednesday_state(), 11, 0).apply(Command::Right);
        assert_eq!(state.coordinate(), GridCoordinate::new(11, 0));
    }

    // ========== left tests ==========

    #[test]
    fn test_left_moves_one_week() {
        let state = wednesday_state().apply(Command::Left);
        assert_eq!(state.coordinate(), GridCoordinate::new(10, 3));
    }

    #[test]
    fn test_left_at_first_column_is_noop() {
        let state = at(wednesday_state(), 0, 4).apply(Command::Left);
        assert_eq!(state.coordinate(), GridCoordinate::new(0, 4));
    }

    #[test]
    fn test_commit_does_not_move() {
        let state = wednesday_state().apply(Command::Commit);
        assert_eq!(state.coordinate(), GridCoordinate::new(11, 3));
    }

    // ========== clamping properties ==========

    #[test]
    fn test_single_week_grid() {
        let mut state = NavigationState::new(date(2023, 3, 1), 1).unwrap();
        for command in [Command::Right, Command::Left, Command::Down] {
            state = state.apply(command);
            assert_eq!(state.coordinate(), GridCoordinate::new(0, 3));
        }
        for _ in 0..10 {
            state = state.apply(Command::Up);
        }
        assert_eq!(state.coordinate(), GridCoordinate::new(0, 0));
    }

    #[test]
    fn test_forward_moves_never_reach_future() {
        for reference in [date(2023, 3, 1), date(2023, 3, 4), date(2023, 3, 5)] {
            let weeks = 8;
            let start = NavigationState::new(reference, weeks).unwrap();
            // Walk from every selectable cell with long runs of down/right
            for col in 0..weeks as i64 {
                for row in 0..7 {
                    let mut state = at(start, col, row);
                    if !start.is_selectable(state.coordinate()) {
                        continue;
                    }
                    for step in 0..40 {
                        let command = if step % 3 == 0 { Command::Right } else { Command::Down };
                        state = state.apply(command);
                        assert!(state.is_selectable(state.coordinate()));
                        let day = CoordinateMapper::coordinate_to_date(state.coordinate(), reference, weeks).unwrap();
                        assert!(day <= reference);
                    }
                }
            }
        }
    }

    #[test]
    fn test_backward_moves_stay_in_grid() {
        let mut state = NavigationState::new(date(2023, 3, 1), 6).unwrap();
        for step in 0..100 {
            let command = if step % 2 == 0 { Command::Up } else { Command::Left };
            state = state.apply(command);
            let coord = state.coordinate();
            assert!(coord.column >= 0 && coord.row >= 0);
        }
        assert_eq!(state.coordinate(), GridCoordinate::new(0, 0));
    }
}
