//! User demographics.

use serde::Serialize;

use crate::derive::EnrichedTable;
use crate::error::{ExplorerError, ExplorerResult};
use crate::reports::utility::{frequency_table, mode};

/// Earliest, most recent, and most common rider birth year.
#[derive(Debug, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Rider breakdown for a filtered view.
///
/// The gender and birth-year blocks are `None` when the source schema has no
/// such columns, or when every cell in the view is blank. Frequency tables
/// list distinct values in first-occurrence order.
#[derive(Debug, Serialize)]
pub struct DemographicsReport {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

/// Computes the user demographics report.
///
/// A schema without demographics columns is an expected shape, handled by
/// omitting those blocks rather than failing.
///
/// # Errors
///
/// Returns [`ExplorerError::NoDataForReport`] when the table has no rows.
pub fn demographics_report(table: &EnrichedTable) -> ExplorerResult<DemographicsReport> {
    if table.is_empty() {
        return Err(ExplorerError::NoDataForReport);
    }

    let user_types = frequency_table(table.trips.iter().map(|t| t.user_type.clone()));

    let genders = match table.genders() {
        Ok(values) => {
            let freq = frequency_table(values.map(str::to_string));
            if freq.is_empty() { None } else { Some(freq) }
        }
        Err(ExplorerError::UnsupportedSchemaField(_)) => None,
        Err(e) => return Err(e),
    };

    let birth_years = match table.birth_years() {
        Ok(values) => birth_year_stats(&values.collect::<Vec<i32>>()),
        Err(ExplorerError::UnsupportedSchemaField(_)) => None,
        Err(e) => return Err(e),
    };

    Ok(DemographicsReport {
        user_types,
        genders,
        birth_years,
    })
}

fn birth_year_stats(years: &[i32]) -> Option<BirthYearStats> {
    let earliest = years.iter().copied().min()?;
    let most_recent = years.iter().copied().max()?;
    let most_common = mode(years.iter().copied())?;

    Some(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::Trip;
    use chrono::{Datelike, NaiveDateTime, Timelike};

    fn trip(user_type: &str, gender: Option<&str>, birth_year: Option<i32>) -> Trip {
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
            trip_duration: 600.0,
            user_type: user_type.to_string(),
            gender: gender.map(str::to_string),
            birth_year,
        }
    }

    fn table(has_demographics: bool, trips: Vec<Trip>) -> EnrichedTable {
        EnrichedTable {
            has_demographics,
            trips,
        }
    }

    #[test]
    fn test_full_schema_report() {
        let report = demographics_report(&table(
            true,
            vec![
                trip("Subscriber", Some("Male"), Some(1992)),
                trip("Customer", Some("Female"), Some(1985)),
                trip("Subscriber", Some("Male"), Some(1992)),
            ],
        ))
        .unwrap();

        assert_eq!(
            report.user_types,
            vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)]
        );
        assert_eq!(
            report.genders,
            Some(vec![("Male".to_string(), 2), ("Female".to_string(), 1)])
        );
        let years = report.birth_years.unwrap();
        assert_eq!(years.earliest, 1985);
        assert_eq!(years.most_recent, 1992);
        assert_eq!(years.most_common, 1992);
    }

    #[test]
    fn test_schema_without_demographics_omits_sections() {
        let report = demographics_report(&table(
            false,
            vec![
                trip("Subscriber", None, None),
                trip("Subscriber", None, None),
                trip("Customer", None, None),
            ],
        ))
        .unwrap();

        assert_eq!(
            report.user_types,
            vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)]
        );
        assert!(report.genders.is_none());
        assert!(report.birth_years.is_none());
    }

    #[test]
    fn test_blank_cells_are_excluded_not_defaulted() {
        let report = demographics_report(&table(
            true,
            vec![
                trip("Subscriber", Some("Female"), None),
                trip("Customer", None, Some(1970)),
            ],
        ))
        .unwrap();

        assert_eq!(report.genders, Some(vec![("Female".to_string(), 1)]));
        let years = report.birth_years.unwrap();
        assert_eq!(years.earliest, 1970);
        assert_eq!(years.most_recent, 1970);
    }

    #[test]
    fn test_all_blank_demographics_cells_omit_blocks() {
        let report =
            demographics_report(&table(true, vec![trip("Subscriber", None, None)])).unwrap();

        assert!(report.genders.is_none());
        assert!(report.birth_years.is_none());
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let result = demographics_report(&table(true, vec![]));
        assert!(matches!(result, Err(ExplorerError::NoDataForReport)));
    }

    #[test]
    fn test_birth_year_mode_tie_breaks_to_first_occurrence() {
        let report = demographics_report(&table(
            true,
            vec![
                trip("Subscriber", None, Some(1988)),
                trip("Subscriber", None, Some(1999)),
                trip("Subscriber", None, Some(1988)),
                trip("Subscriber", None, Some(1999)),
            ],
        ))
        .unwrap();

        assert_eq!(report.birth_years.unwrap().most_common, 1988);
    }
}
