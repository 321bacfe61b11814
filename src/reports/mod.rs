//! Statistics over a filtered trip table.
//!
//! Five independent report functions, each taking the filtered view and
//! returning a structured, serializable result. None of them mutate the
//! table; rendering lives in [`crate::output`].

pub mod demographics;
pub mod duration;
pub mod pagination;
pub mod stations;
pub mod time_travel;
pub mod utility;

use serde::Serialize;

use crate::dataset::City;
use crate::derive::EnrichedTable;
use crate::error::{ExplorerError, ExplorerResult};
use crate::filter::{DayFilter, MonthFilter};

/// Every statistic report for one filtered view, for one-shot output.
///
/// Reports that cannot be computed because the view is empty come back as
/// `None`; that condition is recoverable and must not fail the bundle.
#[derive(Debug, Serialize)]
pub struct ReportBundle {
    pub city: String,
    pub month_filter: String,
    pub day_filter: String,
    pub rows: usize,
    pub time_travel: Option<time_travel::TimeTravelReport>,
    pub stations: Option<stations::StationReport>,
    pub duration: Option<duration::DurationReport>,
    pub demographics: Option<demographics::DemographicsReport>,
}

/// Runs all four statistic reports against one filtered view.
pub fn report_bundle(
    city: City,
    month: MonthFilter,
    day: DayFilter,
    table: &EnrichedTable,
) -> ExplorerResult<ReportBundle> {
    Ok(ReportBundle {
        city: city.name().to_string(),
        month_filter: month.to_string(),
        day_filter: day.to_string(),
        rows: table.len(),
        time_travel: recoverable(time_travel::time_travel_report(table))?,
        stations: recoverable(stations::station_report(table))?,
        duration: recoverable(duration::duration_report(table))?,
        demographics: recoverable(demographics::demographics_report(table))?,
    })
}

/// Maps the expected empty-table condition to `None`; everything else
/// propagates.
fn recoverable<T>(result: ExplorerResult<T>) -> ExplorerResult<Option<T>> {
    match result {
        Ok(report) => Ok(Some(report)),
        Err(ExplorerError::NoDataForReport) => Ok(None),
        Err(e) => Err(e),
    }
}
