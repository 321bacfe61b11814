//! Most frequent times of travel.

use serde::Serialize;

use crate::derive::EnrichedTable;
use crate::error::{ExplorerError, ExplorerResult};
use crate::reports::utility::{mode, weekday_name};

/// Mode of the month, weekday, and start hour across a filtered view.
#[derive(Debug, Serialize)]
pub struct TimeTravelReport {
    pub most_common_month: u32,
    pub most_common_weekday: String,
    pub most_common_hour: u32,
}

/// Computes the time-of-travel report.
///
/// # Errors
///
/// Returns [`ExplorerError::NoDataForReport`] when the table has no rows.
pub fn time_travel_report(table: &EnrichedTable) -> ExplorerResult<TimeTravelReport> {
    let month = mode(table.trips.iter().map(|t| t.month)).ok_or(ExplorerError::NoDataForReport)?;
    let weekday =
        mode(table.trips.iter().map(|t| t.weekday)).ok_or(ExplorerError::NoDataForReport)?;
    let hour = mode(table.trips.iter().map(|t| t.hour)).ok_or(ExplorerError::NoDataForReport)?;

    Ok(TimeTravelReport {
        most_common_month: month,
        most_common_weekday: weekday_name(weekday).to_string(),
        most_common_hour: hour,
    })
}
