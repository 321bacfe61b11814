//! Interactive exploration loop.
//!
//! Prompts for a city and filters, runs the pipeline, prints every report,
//! then offers raw rows five at a time and a restart. Input validation lives
//! in the `FromStr` impls; this module is only the I/O around them. Each
//! iteration builds its table from scratch; nothing is shared between
//! restarts.

use std::io::{self, BufRead};
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Result, bail};
use tracing::debug;

use crate::dataset::{self, City};
use crate::derive;
use crate::error::{ExplorerError, ExplorerResult};
use crate::filter::{self, DayFilter, MonthFilter};
use crate::output;
use crate::reports::demographics::demographics_report;
use crate::reports::duration::duration_report;
use crate::reports::pagination::RawRowPager;
use crate::reports::stations::station_report;
use crate::reports::time_travel::time_travel_report;

/// Runs the interactive session until the user declines a restart.
pub fn run(data_dir: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Hello! Let's explore some US bikeshare data!");

    loop {
        let city: City = prompt(&mut input, "Which city? (chicago, new york city, washington)")?;
        let month: MonthFilter =
            prompt(&mut input, "Which month? (january through june, or all)")?;
        let day: DayFilter = prompt(&mut input, "Which day? (monday through sunday, or all)")?;
        println!("{}", "-".repeat(40));

        let load_start = Instant::now();
        let store = dataset::load_city(data_dir, city)?;
        let enriched = derive::enrich(store)?;
        let table = filter::apply(&enriched, month, day);
        debug!(
            elapsed_ms = load_start.elapsed().as_millis() as u64,
            rows = table.len(),
            "Filtered table ready"
        );

        print_report(time_travel_report(&table).map(|r| output::render_time_travel(&r)))?;
        print_report(station_report(&table).map(|r| output::render_stations(&r)))?;
        print_report(duration_report(&table).map(|r| output::render_duration(&r)))?;
        print_report(demographics_report(&table).map(|r| output::render_demographics(&r)))?;

        let mut pager = RawRowPager::new(&table);
        while confirm(&mut input, "Would you like to see 5 lines of raw data?")? {
            let (rows, exhausted) = pager.next_page();
            print!("{}", output::render_page(rows));
            if exhausted {
                println!("(end of data)");
                break;
            }
        }

        if !confirm(&mut input, "Would you like to restart?")? {
            return Ok(());
        }
    }
}

/// Prints a rendered report, or the no-data notice when the filtered table
/// was empty. Any other error aborts the iteration.
fn print_report(result: ExplorerResult<String>) -> Result<()> {
    match result {
        Ok(text) => println!("{text}"),
        Err(ExplorerError::NoDataForReport) => println!("{}", output::render_no_data()),
        Err(e) => return Err(e.into()),
    }
    println!("{}", "-".repeat(40));
    Ok(())
}

/// Asks until the answer parses; parse errors are shown and the question
/// repeats.
fn prompt<T, R>(input: &mut R, question: &str) -> Result<T>
where
    T: FromStr<Err = ExplorerError>,
    R: BufRead,
{
    loop {
        println!("{question}");
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for an answer");
        }
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(e) => println!("{e}"),
        }
    }
}

/// Yes/no question; anything other than "yes" counts as no, end of input
/// counts as no.
fn confirm<R: BufRead>(input: &mut R, question: &str) -> Result<bool> {
    println!("{question} Enter yes or no.");
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim().eq_ignore_ascii_case("yes"))
}
