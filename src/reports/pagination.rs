//! Raw-row pagination.

use crate::derive::{EnrichedTable, Trip};

/// Rows returned per page.
pub const PAGE_SIZE: usize = 5;

/// Restartable cursor over a filtered table's rows in original order.
///
/// Each [`next_page`](RawRowPager::next_page) call yields up to
/// [`PAGE_SIZE`] rows and advances the offset. Past the end it keeps
/// returning an empty page with `exhausted = true`; it never goes out of
/// range. Restart by creating a fresh cursor.
pub struct RawRowPager<'a> {
    trips: &'a [Trip],
    offset: usize,
}

impl<'a> RawRowPager<'a> {
    pub fn new(table: &'a EnrichedTable) -> Self {
        Self {
            trips: &table.trips,
            offset: 0,
        }
    }

    /// Returns the next page and whether the cursor has reached the end.
    pub fn next_page(&mut self) -> (&'a [Trip], bool) {
        let start = self.offset.min(self.trips.len());
        let end = (start + PAGE_SIZE).min(self.trips.len());
        self.offset = end;

        (&self.trips[start..end], end >= self.trips.len())
    }
}
