use crate::domain::{Entry, MediaType};
use chrono::NaiveDate;
use reqwest::Url;

const PLACEHOLDER_BASE: &str = "https://placehold.co/400x300/0b0d17/e0e6ff";
const VIDEO_PLACEHOLDER_TEXT: &str = "Video: click to watch";

/// What a tile shows in place of the media itself.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaPreview {
    /// Non-HD image of an image entry.
    Image { url: String },
    /// Video thumbnail with a play overlay.
    Thumbnail { url: String },
    /// Video entry without a thumbnail.
    TextPlaceholder(String),
    /// Generated image used after the preview failed to load.
    Placeholder { url: String },
}

impl MediaPreview {
    pub fn for_entry(entry: &Entry) -> Self {
        match entry.media_type {
            MediaType::Video => match entry.thumbnail() {
                Some(url) => MediaPreview::Thumbnail {
                    url: url.to_string(),
                },
                None => MediaPreview::TextPlaceholder(VIDEO_PLACEHOLDER_TEXT.to_string()),
            },
            MediaType::Image => MediaPreview::Image {
                url: entry.url.clone(),
            },
        }
    }

    /// URL the preview loads, if it loads one.
    pub fn source_url(&self) -> Option<&str> {
        match self {
            MediaPreview::Image { url }
            | MediaPreview::Thumbnail { url }
            | MediaPreview::Placeholder { url } => Some(url),
            MediaPreview::TextPlaceholder(_) => None,
        }
    }

    pub fn has_play_overlay(&self) -> bool {
        matches!(self, MediaPreview::Thumbnail { .. })
    }
}

/// Placeholder image URL labelled with `text`.
pub fn placeholder_url(text: &str) -> String {
    let label = if text.trim().is_empty() { "No image" } else { text };
    match Url::parse_with_params(PLACEHOLDER_BASE, &[("text", label)]) {
        Ok(url) => url.to_string(),
        Err(_) => PLACEHOLDER_BASE.to_string(),
    }
}

/// One gallery cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub preview: MediaPreview,
    pub title: String,
    pub date: NaiveDate,
    pub entry: Entry,
}

impl Tile {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            preview: MediaPreview::for_entry(entry),
            title: entry.title.clone(),
            date: entry.date,
            entry: entry.clone(),
        }
    }

    pub fn is_video(&self) -> bool {
        self.entry.is_video()
    }

    /// Swap a preview that failed to load for a generated placeholder.
    ///
    /// Text placeholders load nothing and stay as they are.
    pub fn on_load_error(&mut self) {
        let label = match &self.preview {
            MediaPreview::Image { .. } => self.title.as_str(),
            MediaPreview::Thumbnail { .. } => "Video",
            MediaPreview::TextPlaceholder(_) | MediaPreview::Placeholder { .. } => return,
        };
        self.preview = MediaPreview::Placeholder {
            url: placeholder_url(label),
        };
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.preview, MediaPreview::Placeholder { .. })
    }
}
