//! Total and average trip duration.

use serde::Serialize;

use crate::derive::EnrichedTable;
use crate::error::{ExplorerError, ExplorerResult};

/// Sum and arithmetic mean of trip durations, in seconds.
#[derive(Debug, Serialize)]
pub struct DurationReport {
    pub trips: usize,
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

/// Total travel time in seconds. Defined as 0 for an empty table.
pub fn total_duration(table: &EnrichedTable) -> f64 {
    table.trips.iter().map(|t| t.trip_duration).sum()
}

/// Computes the trip duration report.
///
/// # Errors
///
/// Returns [`ExplorerError::NoDataForReport`] when the table has no rows:
/// the mean is undefined there and must not leak a NaN to the caller.
pub fn duration_report(table: &EnrichedTable) -> ExplorerResult<DurationReport> {
    if table.is_empty() {
        return Err(ExplorerError::NoDataForReport);
    }

    let total = total_duration(table);

    Ok(DurationReport {
        trips: table.len(),
        total_seconds: total,
        mean_seconds: total / table.len() as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::Trip;
    use chrono::{Datelike, NaiveDateTime, Timelike};

    fn trip(trip_duration: f64) -> Trip {
        let start_time =
            NaiveDateTime::parse_from_str("2017-03-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        Trip {
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            end_time: None,
            start_station: "A St".to_string(),
            end_station: "B St".to_string(),
            trip_duration,
            user_type: "Subscriber".to_string(),
            gender: None,
            birth_year: None,
        }
    }

    fn table(durations: &[f64]) -> EnrichedTable {
        EnrichedTable {
            has_demographics: false,
            trips: durations.iter().map(|&d| trip(d)).collect(),
        }
    }

    #[test]
    fn test_sum_and_mean() {
        let report = duration_report(&table(&[300.0, 600.0, 900.0])).unwrap();

        assert_eq!(report.trips, 3);
        assert_eq!(report.total_seconds, 1800.0);
        assert_eq!(report.mean_seconds, 600.0);
    }

    #[test]
    fn test_total_of_empty_table_is_zero() {
        assert_eq!(total_duration(&table(&[])), 0.0);
    }

    #[test]
    fn test_mean_of_empty_table_is_an_error() {
        let result = duration_report(&table(&[]));
        assert!(matches!(result, Err(ExplorerError::NoDataForReport)));
    }
}
