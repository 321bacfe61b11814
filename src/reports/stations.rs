//! Most popular stations and trips.

use serde::Serialize;

use crate::derive::EnrichedTable;
use crate::error::{ExplorerError, ExplorerResult};
use crate::reports::utility::mode;

/// Mode of the start station, end station, and start-to-end pair.
#[derive(Debug, Serialize)]
pub struct StationReport {
    pub most_common_start_station: String,
    pub most_common_end_station: String,
    pub most_common_trip: String,
}

/// Computes the station popularity report.
///
/// The trip pair is synthesized per row as `"<start> to <end>"` and lives
/// only inside this report.
///
/// # Errors
///
/// Returns [`ExplorerError::NoDataForReport`] when the table has no rows.
pub fn station_report(table: &EnrichedTable) -> ExplorerResult<StationReport> {
    let start = mode(table.trips.iter().map(|t| t.start_station.as_str()))
        .ok_or(ExplorerError::NoDataForReport)?;
    let end = mode(table.trips.iter().map(|t| t.end_station.as_str()))
        .ok_or(ExplorerError::NoDataForReport)?;
    let trip = mode(
        table
            .trips
            .iter()
            .map(|t| format!("{} to {}", t.start_station, t.end_station)),
    )
    .ok_or(ExplorerError::NoDataForReport)?;

    Ok(StationReport {
        most_common_start_station: start.to_string(),
        most_common_end_station: end.to_string(),
        most_common_trip: trip,
    })
}
