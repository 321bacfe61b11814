//! Month and day-of-week selection over an enriched table.
//!
//! Both selectors are independent equality predicates with an `all` bypass,
//! combined with AND. Filtering clones matching rows into a new table; the
//! input is never mutated and an empty result is valid.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use tracing::debug;

use crate::derive::{EnrichedTable, Trip};
use crate::error::ExplorerError;
use crate::reports::utility::weekday_name;

/// Month names covered by the source data, January through June.
pub const MONTH_NAMES: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// English name for a month number, lowercase.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=6 => MONTH_NAMES[(month - 1) as usize],
        _ => "unknown",
    }
}

/// Month selector: a specific month (1–6) or the `all` bypass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(u32),
}

impl MonthFilter {
    pub fn matches(self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => m == month,
        }
    }
}

impl FromStr for MonthFilter {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == "all" {
            return Ok(MonthFilter::All);
        }
        if let Some(idx) = MONTH_NAMES.iter().position(|&name| name == normalized) {
            return Ok(MonthFilter::Month(idx as u32 + 1));
        }
        if let Ok(number) = normalized.parse::<u32>() {
            if (1..=6).contains(&number) {
                return Ok(MonthFilter::Month(number));
            }
        }
        Err(ExplorerError::InvalidSelector {
            kind: "month",
            value: s.to_string(),
        })
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month(m) => f.write_str(month_name(*m)),
        }
    }
}

/// Day-of-week selector: a specific weekday or the `all` bypass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    pub fn matches(self, weekday: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => d == weekday,
        }
    }
}

impl FromStr for DayFilter {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(DayFilter::All);
        }
        trimmed
            .parse::<Weekday>()
            .map(DayFilter::Day)
            .map_err(|_| ExplorerError::InvalidSelector {
                kind: "day",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Day(d) => f.write_str(weekday_name(*d)),
        }
    }
}

/// Produces a new table holding exactly the rows matching both selectors,
/// in their original relative order.
pub fn apply(table: &EnrichedTable, month: MonthFilter, day: DayFilter) -> EnrichedTable {
    let trips: Vec<Trip> = table
        .trips
        .iter()
        .filter(|t| month.matches(t.month) && day.matches(t.weekday))
        .cloned()
        .collect();

    debug!(
        input_rows = table.len(),
        output_rows = trips.len(),
        month = %month,
        day = %day,
        "Filters applied"
    );

    EnrichedTable {
        has_demographics: table.has_demographics,
        trips,
    }
}
