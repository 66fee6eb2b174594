use crate::error::{GalleryError, Result};
use chrono::{Duration, NaiveDate};

/// Number of calendar days a gallery window spans.
pub const WINDOW_DAYS: i64 = 9;

/// Inclusive run of days ending on a chosen date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    pub fn ending_on(end: NaiveDate) -> Self {
        let start = end - Duration::days(WINDOW_DAYS - 1);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        let end = self.end;
        (0..=(end - start).num_days()).map(move |i| start + Duration::days(i))
    }

    pub fn day_count(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }
}

/// Parse a picker value into a window end date no later than `today`.
pub fn parse_end_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GalleryError::EmptyDate);
    }

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| GalleryError::InvalidDate(trimmed.to_string()))?;

    if date > today {
        return Err(GalleryError::FutureDate(trimmed.to_string()));
    }

    Ok(date)
}
