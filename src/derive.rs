//! Calendar-field enrichment.
//!
//! Parses every raw `Start Time` into a [`NaiveDateTime`] and appends the
//! derived month, weekday, and hour fields. One unparseable value aborts the
//! whole load; rows are never silently dropped or reordered.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use tracing::debug;

use crate::dataset::RecordStore;
use crate::error::{ExplorerError, ExplorerResult};

/// Accepted `Start Time` formats, tried in order.
const START_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// One trip record with its calendar fields derived from `start_time`.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    pub start_station: String,
    pub end_station: String,
    pub trip_duration: f64,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // derived once here, never recomputed downstream
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

/// An enriched table: every row of one source with calendar fields attached.
/// Filtered views reuse this type; the schema capability flag travels with
/// the rows.
#[derive(Debug)]
pub struct EnrichedTable {
    pub has_demographics: bool,
    pub trips: Vec<Trip>,
}

impl EnrichedTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Present gender values in row order.
    ///
    /// Fails with [`ExplorerError::UnsupportedSchemaField`] when the source
    /// schema has no `Gender` column; blank cells are skipped.
    pub fn genders(&self) -> ExplorerResult<impl Iterator<Item = &str>> {
        if !self.has_demographics {
            return Err(ExplorerError::UnsupportedSchemaField("Gender"));
        }
        Ok(self.trips.iter().filter_map(|t| t.gender.as_deref()))
    }

    /// Present birth-year values in row order, under the same schema rule.
    pub fn birth_years(&self) -> ExplorerResult<impl Iterator<Item = i32>> {
        if !self.has_demographics {
            return Err(ExplorerError::UnsupportedSchemaField("Birth Year"));
        }
        Ok(self.trips.iter().filter_map(|t| t.birth_year))
    }
}

fn parse_start_time(raw: &str) -> ExplorerResult<NaiveDateTime> {
    let trimmed = raw.trim();
    for fmt in START_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }
    Err(ExplorerError::MalformedTimestamp {
        value: raw.to_string(),
    })
}

/// Consumes a [`RecordStore`] and produces the enriched table.
///
/// Output row count and order match the input exactly.
pub fn enrich(store: RecordStore) -> ExplorerResult<EnrichedTable> {
    let mut trips = Vec::with_capacity(store.rows.len());

    for row in store.rows {
        let start_time = parse_start_time(&row.start_time)?;
        trips.push(Trip {
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            end_time: row.end_time,
            start_station: row.start_station,
            end_station: row.end_station,
            trip_duration: row.trip_duration,
            user_type: row.user_type,
            gender: row.gender,
            birth_year: row.birth_year,
        });
    }

    debug!(rows = trips.len(), "Calendar fields derived");

    Ok(EnrichedTable {
        has_demographics: store.has_demographics,
        trips,
    })
}
