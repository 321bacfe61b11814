//! Shared helpers for the report functions.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::Weekday;

/// Most frequent value in the input. When several values share the maximum
/// frequency, the one occurring first wins. Returns `None` for empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();

    for value in values {
        let count = counts.entry(value.clone()).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for value in order {
        let count = counts[&value];
        match &best {
            Some((_, best_count)) if count <= *best_count => {}
            _ => best = Some((value, count)),
        }
    }

    best.map(|(value, _)| value)
}

/// Count of each distinct value, listed in first-occurrence order so the
/// output is deterministic for a given input.
pub fn frequency_table<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut table: Vec<(T, usize)> = Vec::new();

    for value in values {
        match index.get(&value) {
            Some(&slot) => table[slot].1 += 1,
            None => {
                index.insert(value.clone(), table.len());
                table.push((value, 1));
            }
        }
    }

    table
}

/// Full English weekday name.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
