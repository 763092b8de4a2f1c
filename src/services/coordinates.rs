//! Conversion between calendar dates and grid coordinates
//!
//! Weeks start on Sunday. The last column holds the week of the reference
//! date and earlier weeks extend to the left. Week distances are counted
//! between Sunday-aligned week starts, so month lengths and year boundaries
//! never shift a weekday into the wrong row.
//!
//! Week distances work on day numbers, so any pair of dates maps to a
//! coordinate. Going back from a coordinate to a date can leave chrono's
//! supported range, and yields `None` there.

use chrono::{Datelike, Duration, NaiveDate};

use crate::types::GridCoordinate;

/// Pure date <-> coordinate mapping relative to a reference date
pub struct CoordinateMapper;

impl CoordinateMapper {
    /// Sunday on or before `date`, `None` before `NaiveDate::MIN`
    pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
        date.checked_sub_signed(Duration::days(date.weekday().num_days_from_sunday() as i64))
    }

    /// Day number of the Sunday starting the week of `date`
    fn week_start_day(date: NaiveDate) -> i64 {
        date.num_days_from_ce() as i64 - date.weekday().num_days_from_sunday() as i64
    }

    /// Whole calendar weeks between the week of `date` and the week of
    /// `reference`. Negative for weeks after the reference week.
    pub fn weeks_ago(date: NaiveDate, reference: NaiveDate) -> i64 {
        (Self::week_start_day(reference) - Self::week_start_day(date)).div_euclid(7)
    }

    /// Grid coordinate of `date`. Not clamped: callers check bounds.
    pub fn date_to_coordinate(date: NaiveDate, reference: NaiveDate, weeks: usize) -> GridCoordinate {
        let column = (weeks as i64 - 1) - Self::weeks_ago(date, reference);
        let row = date.weekday().num_days_from_sunday() as i64;
        GridCoordinate::new(column, row)
    }

    /// Calendar date shown at `coord`, `None` outside chrono's date range
    pub fn coordinate_to_date(
        coord: GridCoordinate,
        reference: NaiveDate,
        weeks: usize,
    ) -> Option<NaiveDate> {
        let end = Self::date_to_coordinate(reference, reference, weeks);
        let column_diff = end.column.checked_sub(coord.column)?;
        let row_diff = end.row.checked_sub(coord.row)?;
        let days = column_diff.checked_mul(7)?.checked_add(row_diff)?;
        reference.checked_sub_signed(Duration::try_days(days)?)
    }
}
