/// Test fixtures for dataset-based tests
///
/// Builds small in-memory datasets and stand-in sources so tests never reach
/// the network.
///
/// ## Usage Examples
///
/// ```ignore
/// use crate::infrastructure::test_utils::fixtures::{date, sample_dataset};
///
/// #[test]
/// fn my_test() {
///     let session = Session::with_dataset(sample_dataset());
///     let entries = session.filter(date(2024, 1, 9)).unwrap();
/// }
/// ```
#[cfg(test)]
pub mod fixtures {
    use crate::domain::{Entry, MediaType};
    use crate::error::{GalleryError, Result};
    use crate::infrastructure::{DatasetSource, MediaProbe};
    use chrono::NaiveDate;
    use std::cell::Cell;
    use std::collections::HashSet;
    use std::path::{Path, PathBuf};

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
    }

    pub fn image_entry(date: NaiveDate) -> Entry {
        Entry::new(date, format!("Entry {}", date), MediaType::Image)
            .with_explanation(format!("Explanation for {}.", date))
            .with_url(format!("https://example.org/{}.jpg", date))
    }

    pub fn video_entry(date: NaiveDate) -> Entry {
        Entry::new(date, format!("Entry {}", date), MediaType::Video)
            .with_explanation(format!("Explanation for {}.", date))
            .with_url(format!("https://www.youtube.com/embed/{}", date))
    }

    pub fn entry_on(date: NaiveDate) -> Entry {
        image_entry(date)
    }

    /// Ten consecutive days, 2024-01-01 through 2024-01-10, in date order.
    ///
    /// 01-03 is a video without thumbnail, 01-06 a video with one and
    /// 01-04 carries an HD url.
    pub fn sample_dataset() -> Vec<Entry> {
        (1..=10)
            .map(|day| {
                let d = date(2024, 1, day);
                match day {
                    3 => video_entry(d),
                    6 => video_entry(d).with_thumbnail(format!("https://img.example.org/{}.jpg", d)),
                    4 => image_entry(d).with_hdurl(format!("https://example.org/{}_hd.jpg", d)),
                    _ => image_entry(d),
                }
            })
            .collect()
    }

    /// Write [`sample_dataset`] as JSON into `dir` and return the file path.
    pub fn write_dataset(dir: &Path) -> PathBuf {
        let path = dir.join("data.json");
        let json = serde_json::to_string_pretty(&sample_dataset()).expect("serialize fixture");
        std::fs::write(&path, json).expect("write fixture");
        path
    }

    /// Source that counts how often it is fetched.
    pub struct CountingSource {
        entries: Vec<Entry>,
        calls: Cell<usize>,
    }

    impl CountingSource {
        pub fn new(entries: Vec<Entry>) -> Self {
            Self {
                entries,
                calls: Cell::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    impl DatasetSource for CountingSource {
        fn fetch(&self) -> Result<Vec<Entry>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.entries.clone())
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    /// Source whose server always answers 503.
    pub struct FailingSource;

    impl DatasetSource for FailingSource {
        fn fetch(&self) -> Result<Vec<Entry>> {
            Err(GalleryError::Status(503))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    /// Probe that treats a fixed set of URLs as broken.
    pub struct BrokenUrls(pub HashSet<String>);

    impl BrokenUrls {
        pub fn new<I, S>(urls: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self(urls.into_iter().map(Into::into).collect())
        }
    }

    impl MediaProbe for BrokenUrls {
        fn is_reachable(&self, url: &str) -> bool {
            !self.0.contains(url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::domain::MediaType;
    use crate::infrastructure::DatasetSource;

    #[test]
    fn sample_dataset_shape() {
        let entries = sample_dataset();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[2].media_type, MediaType::Video);
        assert!(entries[2].thumbnail().is_none());
        assert!(entries[5].thumbnail().is_some());
    }

    #[test]
    fn counting_source_counts() {
        let source = CountingSource::new(sample_dataset());
        source.fetch().unwrap();
        source.fetch().unwrap();
        assert_eq!(source.calls(), 2);
    }
}
