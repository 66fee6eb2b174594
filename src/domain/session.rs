use crate::domain::{Entry, WINDOW_DAYS, Window};
use crate::error::{GalleryError, Result};
use crate::infrastructure::DatasetSource;
use chrono::NaiveDate;
use log::{debug, info, warn};

/// Holds the dataset for the lifetime of a viewing session.
///
/// The dataset is written once by [`Session::load`] and only read afterwards.
#[derive(Debug, Default)]
pub struct Session {
    dataset: Option<Vec<Entry>>,
}

impl Session {
    pub fn new() -> Self {
        Self { dataset: None }
    }

    pub fn with_dataset(entries: Vec<Entry>) -> Self {
        Self {
            dataset: Some(entries),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    pub fn dataset(&self) -> Option<&[Entry]> {
        self.dataset.as_deref()
    }

    /// Fetch the dataset from `source` unless it is already cached.
    ///
    /// Returns the number of cached entries.
    pub fn load(&mut self, source: &dyn DatasetSource) -> Result<usize> {
        if let Some(entries) = &self.dataset {
            debug!("event=dataset_load status=cached entries={}", entries.len());
            return Ok(entries.len());
        }

        match source.fetch() {
            Ok(entries) => {
                info!(
                    "event=dataset_load status=ok source={} entries={}",
                    source.describe(),
                    entries.len()
                );
                let count = entries.len();
                self.dataset = Some(entries);
                Ok(count)
            }
            Err(e) => {
                warn!(
                    "event=dataset_load status=error source={} error={}",
                    source.describe(),
                    e
                );
                Err(e)
            }
        }
    }

    /// All cached entries inside `window`, newest first.
    ///
    /// Entries sharing a date keep their dataset order.
    pub fn entries_in_window(&self, window: Window) -> Result<Vec<&Entry>> {
        let dataset = self.dataset.as_ref().ok_or(GalleryError::NotLoaded)?;

        let mut selected: Vec<&Entry> = dataset
            .iter()
            .filter(|entry| window.contains(entry.date))
            .collect();
        selected.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(selected)
    }

    /// Entries of the 9-day window ending on `end`, newest first.
    ///
    /// Fails with [`GalleryError::InsufficientData`] unless the window holds
    /// at least nine entries; never returns a partial gallery.
    pub fn filter(&self, end: NaiveDate) -> Result<Vec<Entry>> {
        let window = Window::ending_on(end);
        let selected = self.entries_in_window(window)?;

        if selected.len() < WINDOW_DAYS as usize {
            let missing = missing_days(window, &selected);
            info!(
                "event=window_filter status=insufficient start={} end={} found={} missing={}",
                window.start(),
                window.end(),
                selected.len(),
                missing.len()
            );
            debug!("event=window_filter missing_days={:?}", missing);
            return Err(GalleryError::InsufficientData {
                found: selected.len(),
            });
        }

        info!(
            "event=window_filter status=ok start={} end={} found={}",
            window.start(),
            window.end(),
            selected.len()
        );

        Ok(selected
            .into_iter()
            .take(WINDOW_DAYS as usize)
            .cloned()
            .collect())
    }

    /// First cached entry for `date`.
    pub fn find(&self, date: NaiveDate) -> Result<&Entry> {
        let dataset = self.dataset.as_ref().ok_or(GalleryError::NotLoaded)?;
        dataset
            .iter()
            .find(|entry| entry.date == date)
            .ok_or_else(|| GalleryError::NoEntry(date.to_string()))
    }
}

/// Days of `window` with no entry among `selected`.
pub fn missing_days(window: Window, selected: &[&Entry]) -> Vec<NaiveDate> {
    window
        .days()
        .filter(|day| !selected.iter().any(|entry| entry.date == *day))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::test_utils::fixtures::{
        CountingSource, FailingSource, date, entry_on, sample_dataset,
    };

    fn loaded() -> Session {
        Session::with_dataset(sample_dataset())
    }

    #[test]
    fn full_window_renders_nine_newest_first() {
        let session = loaded();
        let entries = session.filter(date(2024, 1, 9)).unwrap();

        assert_eq!(entries.len(), 9);
        assert_eq!(entries[0].date, date(2024, 1, 9));
        assert_eq!(entries[8].date, date(2024, 1, 1));
        assert!(entries.windows(2).all(|pair| pair[0].date >= pair[1].date));
    }

    #[test]
    fn entries_outside_window_never_appear() {
        let session = loaded();
        let entries = session.filter(date(2024, 1, 10)).unwrap();

        assert_eq!(entries.len(), 9);
        assert!(entries.iter().all(|e| e.date != date(2024, 1, 1)));
        assert_eq!(entries[0].date, date(2024, 1, 10));
    }

    #[test]
    fn partial_window_reports_count() {
        let session = loaded();
        let err = session.filter(date(2024, 1, 5)).unwrap_err();

        assert!(matches!(err, GalleryError::InsufficientData { found: 5 }));
        assert!(err.user_message().starts_with("Only found 5 entries"));
    }

    #[test]
    fn empty_window_reports_zero() {
        let session = loaded();
        let err = session.filter(date(2030, 6, 1)).unwrap_err();
        assert!(matches!(err, GalleryError::InsufficientData { found: 0 }));
    }

    #[test]
    fn equal_dates_keep_dataset_order() {
        let mut entries = sample_dataset();
        entries.push(entry_on(date(2024, 1, 5)).with_url("second"));
        let session = Session::with_dataset(entries);

        let window = Window::ending_on(date(2024, 1, 9));
        let selected = session.entries_in_window(window).unwrap();
        let fifth: Vec<_> = selected
            .iter()
            .filter(|e| e.date == date(2024, 1, 5))
            .map(|e| e.url.as_str())
            .collect();

        assert_eq!(fifth.len(), 2);
        assert_eq!(fifth[1], "second");
    }

    #[test]
    fn duplicates_are_capped_at_nine() {
        let mut entries = sample_dataset();
        entries.push(entry_on(date(2024, 1, 9)).with_url("dup"));
        let session = Session::with_dataset(entries);

        let filtered = session.filter(date(2024, 1, 9)).unwrap();
        assert_eq!(filtered.len(), 9);
        assert_eq!(filtered[1].url, "dup");
        assert_eq!(filtered[8].date, date(2024, 1, 2));
    }

    #[test]
    fn filter_before_load_fails() {
        let session = Session::new();
        assert!(matches!(
            session.filter(date(2024, 1, 9)),
            Err(GalleryError::NotLoaded)
        ));
    }

    #[test]
    fn load_fetches_only_once() {
        let source = CountingSource::new(sample_dataset());
        let mut session = Session::new();

        assert_eq!(session.load(&source).unwrap(), 10);
        assert_eq!(session.load(&source).unwrap(), 10);
        assert_eq!(source.calls(), 1);
        assert!(session.is_loaded());
    }

    #[test]
    fn failed_load_leaves_session_empty() {
        let mut session = Session::new();
        let err = session.load(&FailingSource).unwrap_err();

        assert!(err.is_load_failure());
        assert!(!session.is_loaded());
    }

    #[test]
    fn find_by_date() {
        let session = loaded();
        assert_eq!(session.find(date(2024, 1, 4)).unwrap().title, "Entry 2024-01-04");
        assert!(matches!(
            session.find(date(2020, 1, 1)),
            Err(GalleryError::NoEntry(_))
        ));
    }

    #[test]
    fn missing_days_lists_gaps_before_the_dataset() {
        let session = loaded();
        let window = Window::ending_on(date(2024, 1, 5));
        let selected = session.entries_in_window(window).unwrap();

        let missing = missing_days(window, &selected);
        assert_eq!(
            missing,
            vec![
                date(2023, 12, 28),
                date(2023, 12, 29),
                date(2023, 12, 30),
                date(2023, 12, 31),
            ]
        );

        let full = Window::ending_on(date(2024, 1, 9));
        let selected = session.entries_in_window(full).unwrap();
        assert!(missing_days(full, &selected).is_empty());
    }
}
