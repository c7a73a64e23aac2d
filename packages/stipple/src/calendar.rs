//! Mapping between grid cells and calendar dates
//!
//! Column 0, row 0 of a year's grid is the last Sunday on or before January 1.
//! Every other cell is that origin plus `7 * col + row` days.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{StippleError, StippleResult};
use crate::grid::{GRID_COLS, GRID_ROWS, Grid};

/// Weekday shown in row 0
pub const WEEK_START: Weekday = Weekday::Sun;

/// Number of days a grid spans
pub const GRID_DAYS: u64 = (GRID_COLS * GRID_ROWS) as u64;

/// Date of row 0, column 0 for `year`. May fall in December of the previous year.
pub fn grid_origin(year: i32) -> StippleResult<NaiveDate> {
    let out_of_range = || StippleError::YearOutOfRange(i64::from(year));

    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(out_of_range)?;
    let days_since_start =
        (7 + jan1.weekday().num_days_from_monday() - WEEK_START.num_days_from_monday()) % 7;

    jan1.checked_sub_days(Days::new(u64::from(days_since_start)))
        .ok_or_else(out_of_range)
}

/// Date of a single grid cell
#[inline]
fn cell_date(origin: NaiveDate, row: usize, col: usize) -> Option<NaiveDate> {
    origin.checked_add_days(Days::new((col * GRID_ROWS + row) as u64))
}

/// First and last date covered by the grid for `year`
pub fn grid_window(year: i32) -> StippleResult<(NaiveDate, NaiveDate)> {
    let origin = grid_origin(year)?;
    let last = origin
        .checked_add_days(Days::new(GRID_DAYS - 1))
        .ok_or(StippleError::YearOutOfRange(i64::from(year)))?;
    Ok((origin, last))
}

/// One date per lit cell, ascending
pub fn bitmap_to_dates(grid: &Grid, year: i32) -> StippleResult<Vec<NaiveDate>> {
    let origin = grid_origin(year)?;

    // Column-major iteration is already chronological.
    let dates = grid
        .lit_cells()
        .map(|(row, col)| {
            cell_date(origin, row, col).ok_or(StippleError::YearOutOfRange(i64::from(year)))
        })
        .collect::<StippleResult<Vec<_>>>()?;

    debug_assert!(dates.is_sorted());
    log::debug!("mapped {} lit cells onto {} starting {}", dates.len(), year, origin);

    Ok(dates)
}

/// Grid cell `(row, col)` holding `date` in the grid for `year`, if it is on the grid
pub fn grid_cell_for(date: NaiveDate, year: i32) -> StippleResult<Option<(usize, usize)>> {
    let origin = grid_origin(year)?;
    let days = date.signed_duration_since(origin).num_days();

    if days < 0 || days >= GRID_DAYS as i64 {
        return Ok(None);
    }

    let days = days as usize;
    Ok(Some((days % GRID_ROWS, days / GRID_ROWS)))
}
