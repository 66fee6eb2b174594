use crate::domain::{Entry, MediaType};
use chrono::NaiveDate;
use log::info;

/// Media shown inside the detail overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddedMedia {
    /// Interactive player frame for a video entry.
    Frame { url: String },
    /// Full image, HD when available.
    Image { url: String },
}

impl EmbeddedMedia {
    pub fn for_entry(entry: &Entry) -> Self {
        match entry.media_type {
            MediaType::Video => EmbeddedMedia::Frame {
                url: entry.url.clone(),
            },
            MediaType::Image => EmbeddedMedia::Image {
                url: entry.best_image_url().to_string(),
            },
        }
    }

    pub fn url(&self) -> &str {
        match self {
            EmbeddedMedia::Frame { url } | EmbeddedMedia::Image { url } => url,
        }
    }

    pub fn is_playable(&self) -> bool {
        matches!(self, EmbeddedMedia::Frame { .. })
    }
}

/// Full-information view of one entry.
///
/// Holds the embedded media only while open; [`Detail::close`] drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub title: String,
    pub date: NaiveDate,
    pub explanation: String,
    media: Option<EmbeddedMedia>,
}

impl Detail {
    pub fn open(entry: &Entry) -> Self {
        info!(
            "event=detail_open date={} media_type={}",
            entry.date, entry.media_type
        );
        Self {
            title: entry.title.clone(),
            date: entry.date,
            explanation: entry.explanation.clone(),
            media: Some(EmbeddedMedia::for_entry(entry)),
        }
    }

    pub fn media(&self) -> Option<&EmbeddedMedia> {
        self.media.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.media.is_some()
    }

    pub fn formatted_date(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }

    /// Dismiss the view, releasing its media immediately.
    pub fn close(&mut self) -> Option<EmbeddedMedia> {
        let media = self.media.take();
        if media.is_some() {
            info!("event=detail_close date={}", self.date);
        }
        media
    }
}
