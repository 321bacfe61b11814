//! Presentation of report results.
//!
//! Report structs stay pure data; everything terminal-facing is built here
//! as strings, plus pretty JSON for machine consumption.

use anyhow::Result;

use crate::derive::Trip;
use crate::filter::month_name;
use crate::reports::ReportBundle;
use crate::reports::demographics::DemographicsReport;
use crate::reports::duration::DurationReport;
use crate::reports::stations::StationReport;
use crate::reports::time_travel::TimeTravelReport;
use crate::reports::utility::weekday_name;

/// Writes a value as pretty-printed JSON to stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Notice used wherever a report had no rows to work with.
pub fn render_no_data() -> String {
    "  no data for the selected filters".to_string()
}

pub fn render_time_travel(report: &TimeTravelReport) -> String {
    format!(
        "Most frequent times of travel:\n  \
         most common month: {}\n  \
         most common day of week: {}\n  \
         most common start hour: {}",
        month_name(report.most_common_month),
        report.most_common_weekday,
        report.most_common_hour,
    )
}

pub fn render_stations(report: &StationReport) -> String {
    format!(
        "Most popular stations and trip:\n  \
         most common start station: {}\n  \
         most common end station: {}\n  \
         most common trip: {}",
        report.most_common_start_station,
        report.most_common_end_station,
        report.most_common_trip,
    )
}

pub fn render_duration(report: &DurationReport) -> String {
    format!(
        "Trip duration over {} trips:\n  \
         total travel time: {:.0} seconds\n  \
         average travel time: {:.1} seconds",
        report.trips, report.total_seconds, report.mean_seconds,
    )
}

pub fn render_demographics(report: &DemographicsReport) -> String {
    let mut out = String::from("User stats:\n");

    out.push_str("  user types:\n");
    for (user_type, count) in &report.user_types {
        out.push_str(&format!("    {user_type}: {count}\n"));
    }

    if let Some(genders) = &report.genders {
        out.push_str("  genders:\n");
        for (gender, count) in genders {
            out.push_str(&format!("    {gender}: {count}\n"));
        }
    }

    if let Some(years) = &report.birth_years {
        out.push_str(&format!(
            "  earliest year of birth: {}\n  \
             most recent year of birth: {}\n  \
             most common year of birth: {}\n",
            years.earliest, years.most_recent, years.most_common,
        ));
    }

    out.pop();
    out
}

/// One line per raw row: start time, stations, duration, rider fields.
pub fn render_page(rows: &[Trip]) -> String {
    let mut out = String::new();
    for trip in rows {
        out.push_str(&format!(
            "{}  {} -> {}  {:.0}s  {} ({})",
            trip.start_time.format("%Y-%m-%d %H:%M:%S"),
            trip.start_station,
            trip.end_station,
            trip.trip_duration,
            trip.user_type,
            weekday_name(trip.weekday),
        ));
        if let Some(gender) = &trip.gender {
            out.push_str(&format!("  {gender}"));
        }
        if let Some(year) = trip.birth_year {
            out.push_str(&format!("  born {year}"));
        }
        out.push('\n');
    }
    out
}

/// Full text rendering of a one-shot report bundle.
pub fn render_bundle(bundle: &ReportBundle) -> String {
    let divider = "-".repeat(40);
    let mut sections = vec![format!(
        "{} | month: {} | day: {} | {} rows",
        bundle.city, bundle.month_filter, bundle.day_filter, bundle.rows
    )];

    sections.push(match &bundle.time_travel {
        Some(report) => render_time_travel(report),
        None => render_no_data(),
    });
    sections.push(match &bundle.stations {
        Some(report) => render_stations(report),
        None => render_no_data(),
    });
    sections.push(match &bundle.duration {
        Some(report) => render_duration(report),
        None => render_no_data(),
    });
    sections.push(match &bundle.demographics {
        Some(report) => render_demographics(report),
        None => render_no_data(),
    });

    let mut out = sections.join(&format!("\n{divider}\n"));
    out.push('\n');
    out
}
