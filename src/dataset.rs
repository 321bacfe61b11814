//! City registry and raw trip-record loading.
//!
//! Each city maps to one CSV file. Loading deserializes every row into a
//! [`RawTrip`] and records whether the file's schema carries the
//! demographics columns (`Gender`, `Birth Year`). That capability flag is
//! decided from the header row, not the city name, so downstream code stays
//! correct if the file mapping changes.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::error::{ExplorerError, ExplorerResult};

/// The fixed set of supported cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// File name of this city's dataset inside the data directory.
    pub fn data_file(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }
}

impl FromStr for City {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', " ").as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            _ => Err(ExplorerError::UnknownCity(s.to_string())),
        }
    }
}

/// One trip record as it appears in the source CSV.
///
/// `start_time` stays a raw string here; parsing happens in the enrichment
/// stage so a malformed value can abort the whole load. The demographics
/// columns are absent entirely from the washington file, and blank cells in
/// the other two deserialize as `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: Option<String>,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "User Type")]
    pub user_type: String,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default, deserialize_with = "de_birth_year")]
    pub birth_year: Option<i32>,
}

/// Birth years are float-formatted in the source files ("1992.0").
fn de_birth_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<f64>()
            .map(|year| Some(year as i32))
            .map_err(|_| serde::de::Error::custom(format!("invalid birth year {s:?}"))),
    }
}

/// The raw rows of one city's dataset, read-only after loading.
#[derive(Debug)]
pub struct RecordStore {
    pub has_demographics: bool,
    pub rows: Vec<RawTrip>,
}

/// Loads one city's CSV file into a [`RecordStore`].
pub fn load_city(data_dir: &Path, city: City) -> ExplorerResult<RecordStore> {
    let path = data_dir.join(city.data_file());
    debug!(city = city.name(), path = %path.display(), "Loading city dataset");

    let file = File::open(&path)?;
    let mut rdr = csv::Reader::from_reader(file);

    let headers = rdr.headers()?;
    let has_demographics =
        headers.iter().any(|h| h == "Gender") && headers.iter().any(|h| h == "Birth Year");

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: RawTrip = result?;
        rows.push(record);
    }

    debug!(
        rows = rows.len(),
        has_demographics, "City dataset loaded"
    );

    Ok(RecordStore {
        has_demographics,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    const FULL_SCHEMA: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-03-04 10:15:00,2017-03-04 10:25:00,600,A St,B St,Subscriber,Male,1992.0
1,2017-03-05 11:00:00,2017-03-05 11:30:00,1800,B St,C St,Customer,,
";

    const BARE_SCHEMA: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-01-01 08:00:00,2017-01-01 08:10:00,600,A St,B St,Subscriber
";

    fn temp_dataset(name: &str, contents: &str) -> PathBuf {
        let dir = env::temp_dir().join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("chicago.csv"), contents).unwrap();
        dir
    }

    #[test]
    fn test_city_from_str() {
        assert_eq!("Chicago".parse::<City>().unwrap(), City::Chicago);
        assert_eq!("new york city".parse::<City>().unwrap(), City::NewYorkCity);
        assert_eq!("new_york_city".parse::<City>().unwrap(), City::NewYorkCity);
        assert!("boston".parse::<City>().is_err());
    }

    #[test]
    fn test_load_full_schema() {
        let dir = temp_dataset("bikeshare_explorer_test_full", FULL_SCHEMA);
        let store = load_city(&dir, City::Chicago).unwrap();

        assert!(store.has_demographics);
        assert_eq!(store.rows.len(), 2);
        assert_eq!(store.rows[0].start_station, "A St");
        assert_eq!(store.rows[0].birth_year, Some(1992));
        assert_eq!(store.rows[0].gender.as_deref(), Some("Male"));
        // blank cells stay absent, not defaulted
        assert_eq!(store.rows[1].gender, None);
        assert_eq!(store.rows[1].birth_year, None);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_without_demographics_columns() {
        let dir = temp_dataset("bikeshare_explorer_test_bare", BARE_SCHEMA);
        let store = load_city(&dir, City::Chicago).unwrap();

        assert!(!store.has_demographics);
        assert_eq!(store.rows.len(), 1);
        assert_eq!(store.rows[0].gender, None);
        assert_eq!(store.rows[0].birth_year, None);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let dir = env::temp_dir().join("bikeshare_explorer_test_missing");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let result = load_city(&dir, City::Washington);
        assert!(matches!(result, Err(ExplorerError::Io(_))));

        fs::remove_dir_all(&dir).unwrap();
    }
}
