use crate::application::Config;
use crate::domain::{Detail, Session, ViewState, parse_end_date};
use crate::error::{GalleryError, Result};
use crate::infrastructure::{
    DatasetSource, FileSource, HttpProbe, HttpSource, MediaOpener, MediaProbe,
};
use chrono::{Local, NaiveDate};
use log::{debug, info, warn};

pub struct GalleryApp {
    pub config: Config,
    session: Session,
    view_state: ViewState,
    end_date: NaiveDate,
    detail: Option<Detail>,
}

impl GalleryApp {
    pub fn new(config: Config) -> Self {
        Self::with_session(config, Session::new())
    }

    pub fn with_session(config: Config, session: Session) -> Self {
        Self {
            config,
            session,
            view_state: ViewState::Loading,
            end_date: today(),
            detail: None,
        }
    }

    /// The dataset source the configuration points at.
    pub fn source(&self) -> Result<Box<dyn DatasetSource>> {
        match &self.config.data_file {
            Some(path) => Ok(Box::new(FileSource::new(path.clone()))),
            None => Ok(Box::new(HttpSource::new(
                self.config.data_url.clone(),
                self.config.http_timeout,
            )?)),
        }
    }

    /// Fetch the dataset once; later calls reuse the cache.
    pub fn load(&mut self) -> Result<usize> {
        let source = self.source()?;
        self.session.load(source.as_ref())
    }

    /// Load the dataset and show the window ending on `end_date`.
    ///
    /// A failed load leaves the app in the error state for good.
    pub fn start(&mut self, end_date: NaiveDate) -> &ViewState {
        match self.load() {
            Ok(_) => self.explore(end_date),
            Err(e) => {
                self.view_state = ViewState::from_error(&e);
                &self.view_state
            }
        }
    }

    /// Re-run the window filter and replace the gallery.
    ///
    /// A filter failure is shown through the error state.
    pub fn explore(&mut self, end_date: NaiveDate) -> &ViewState {
        if let Err(e) = self.try_explore(end_date) {
            debug!("event=window_explore status=error_state error={}", e);
        }
        &self.view_state
    }

    /// Like [`GalleryApp::explore`], also handing back the filter error.
    pub fn try_explore(&mut self, end_date: NaiveDate) -> Result<&ViewState> {
        self.end_date = end_date;
        self.close_detail();

        let entries = match self.session.filter(end_date) {
            Ok(entries) => entries,
            Err(e) => {
                self.view_state = ViewState::from_error(&e);
                return Err(e);
            }
        };
        self.view_state = ViewState::from_filter(Ok(entries));

        if self.config.probe_media {
            match HttpProbe::new(self.config.http_timeout) {
                Ok(probe) => self.apply_probe(&probe),
                Err(e) => warn!("event=media_probe status=unavailable error={}", e),
            }
        }

        Ok(&self.view_state)
    }

    /// Validate a picker value and explore it.
    ///
    /// Validation failures leave the current gallery untouched.
    pub fn explore_input(&mut self, input: &str) -> Result<&ViewState> {
        if !self.session.is_loaded() {
            return Err(GalleryError::NotLoaded);
        }
        let end_date = parse_end_date(input, today())?;
        Ok(self.explore(end_date))
    }

    /// Degrade every tile whose preview cannot be loaded.
    pub fn apply_probe(&mut self, probe: &dyn MediaProbe) {
        let mut degraded = 0;
        for tile in self.view_state.tiles_mut() {
            let Some(url) = tile.preview.source_url() else {
                continue;
            };
            if !probe.is_reachable(url) {
                tile.on_load_error();
                degraded += 1;
            }
        }
        info!("event=media_probe status=ok degraded={}", degraded);
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn detail(&self) -> Option<&Detail> {
        self.detail.as_ref()
    }

    /// Open the detail view for the tile at `index`.
    pub fn select(&mut self, index: usize) -> Option<&Detail> {
        let entry = self.view_state.tiles().get(index)?.entry.clone();
        self.detail = Some(Detail::open(&entry));
        self.detail.as_ref()
    }

    /// Dismiss the detail view, dropping its embedded media.
    pub fn close_detail(&mut self) {
        if let Some(mut detail) = self.detail.take() {
            detail.close();
        }
    }

    /// Hand the open detail's media to the browser.
    ///
    /// Returns the name of the browser used.
    pub fn open_media(&self) -> anyhow::Result<String> {
        let media = self
            .detail
            .as_ref()
            .and_then(|detail| detail.media())
            .ok_or_else(|| anyhow::anyhow!("No media to open"))?;
        let opener = MediaOpener::new(self.config.opener.clone());
        opener.open(media.url())?;
        Ok(opener.label().to_string())
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmbeddedMedia;
    use crate::infrastructure::test_utils::fixtures::{BrokenUrls, date, sample_dataset, write_dataset};
    use std::time::Duration;
    use tempfile::TempDir;

    fn test_config() -> Config {
        Config {
            data_url: "http://127.0.0.1:9/data.json".to_string(),
            data_file: None,
            log_dir: std::env::temp_dir(),
            log_level: "info".to_string(),
            http_timeout: Duration::from_secs(1),
            opener: Some("apod-gallery-no-such-opener".to_string()),
            probe_media: false,
            theme: "dark".to_string(),
        }
    }

    fn loaded_app() -> GalleryApp {
        GalleryApp::with_session(test_config(), Session::with_dataset(sample_dataset()))
    }

    #[test]
    fn starts_in_loading_state() {
        let app = GalleryApp::new(test_config());
        assert!(matches!(app.view_state(), ViewState::Loading));
    }

    #[test]
    fn start_from_file_renders_window() {
        let dir = TempDir::new().unwrap();
        let mut config = test_config();
        config.data_file = Some(write_dataset(dir.path()));

        let mut app = GalleryApp::new(config);
        let state = app.start(date(2024, 1, 9));

        assert_eq!(state.tiles().len(), 9);
        assert_eq!(app.end_date(), date(2024, 1, 9));
    }

    #[test]
    fn failed_load_shows_fixed_message() {
        let mut app = GalleryApp::new(test_config());
        let state = app.start(date(2024, 1, 9));

        assert_eq!(
            state.error_message(),
            Some(crate::error::LOAD_FAILURE_MESSAGE)
        );
        assert!(!app.session().is_loaded());
        assert!(matches!(
            app.explore_input("2024-01-09"),
            Err(GalleryError::NotLoaded)
        ));
    }

    #[test]
    fn explore_replaces_gallery() {
        let mut app = loaded_app();
        assert_eq!(app.explore(date(2024, 1, 9)).tiles().len(), 9);

        let state = app.explore(date(2024, 1, 5));
        assert!(state.tiles().is_empty());
        assert!(state.error_message().unwrap().starts_with("Only found 5 entries"));
    }

    #[test]
    fn explore_failure_replaces_previous_gallery() {
        let mut app = loaded_app();
        app.explore(date(2024, 1, 9));
        app.explore(date(2024, 1, 5));

        assert_eq!(app.end_date(), date(2024, 1, 5));
        assert!(app.view_state().tiles().is_empty());
        assert_eq!(
            app.view_state().error_message(),
            Some(GalleryError::InsufficientData { found: 5 }.user_message().as_str())
        );
    }

    #[test]
    fn try_explore_hands_back_error() {
        let mut app = loaded_app();
        let err = app.try_explore(date(2024, 1, 5)).unwrap_err();
        assert!(matches!(err, GalleryError::InsufficientData { found: 5 }));
        assert!(app.view_state().error_message().is_some());
    }

    #[test]
    fn invalid_input_keeps_gallery() {
        let mut app = loaded_app();
        app.explore(date(2024, 1, 9));

        let err = app.explore_input("").unwrap_err();
        assert_eq!(err.user_message(), "Please select a date.");
        assert_eq!(app.view_state().tiles().len(), 9);
        assert_eq!(app.end_date(), date(2024, 1, 9));
    }

    #[test]
    fn select_and_close_detail() {
        let mut app = loaded_app();
        app.explore(date(2024, 1, 9));

        // Tiles are newest first, so index 6 is 2024-01-03, a video.
        let detail = app.select(6).unwrap();
        assert_eq!(detail.date, date(2024, 1, 3));
        assert!(matches!(detail.media(), Some(EmbeddedMedia::Frame { .. })));

        app.close_detail();
        assert!(app.detail().is_none());
        assert!(app.select(42).is_none());
    }

    #[test]
    fn explore_closes_open_detail() {
        let mut app = loaded_app();
        app.explore(date(2024, 1, 9));
        app.select(0);
        app.explore(date(2024, 1, 10));
        assert!(app.detail().is_none());
    }

    #[test]
    fn probe_degrades_broken_previews() {
        let mut app = loaded_app();
        app.explore(date(2024, 1, 9));

        app.apply_probe(&BrokenUrls::new(["https://example.org/2024-01-09.jpg"]));

        let tiles = app.view_state().tiles();
        assert!(tiles[0].is_degraded());
        assert!(tiles[1..].iter().all(|tile| !tile.is_degraded()));
    }

    #[test]
    fn open_media_without_detail_fails() {
        let app = loaded_app();
        assert!(app.open_media().is_err());
    }

    #[test]
    fn open_media_reports_configured_browser_failure() {
        let mut app = loaded_app();
        app.explore(date(2024, 1, 9));
        app.select(0);

        let err = app.open_media().unwrap_err();
        assert!(format!("{:#}", err).contains("apod-gallery-no-such-opener"));
    }
}
