use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

// Anything that is not a video renders as an image.
impl From<String> for MediaType {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("video") {
            MediaType::Video
        } else {
            MediaType::Image
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Image => write!(f, "image"),
            MediaType::Video => write!(f, "video"),
        }
    }
}

/// One daily record of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub date: NaiveDate,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub media_type: MediaType,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl Entry {
    pub fn new(date: NaiveDate, title: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            date,
            title: title.into(),
            explanation: String::new(),
            media_type,
            url: String::new(),
            hdurl: None,
            thumbnail_url: None,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_hdurl(mut self, hdurl: impl Into<String>) -> Self {
        self.hdurl = Some(hdurl.into());
        self
    }

    pub fn with_thumbnail(mut self, thumbnail_url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(thumbnail_url.into());
        self
    }

    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    /// Thumbnail URL, treating an empty string as absent.
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail_url.as_deref().filter(|url| !url.is_empty())
    }

    /// High-resolution URL if present, otherwise the regular one.
    pub fn best_image_url(&self) -> &str {
        self.hdurl
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "date": "2024-01-03",
            "title": "Orion",
            "explanation": "A nebula.",
            "media_type": "image",
            "url": "https://example.org/orion.jpg",
            "hdurl": "https://example.org/orion_hd.jpg",
            "copyright": "someone",
            "service_version": "v1"
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(entry.media_type, MediaType::Image);
        assert_eq!(entry.best_image_url(), "https://example.org/orion_hd.jpg");
        assert_eq!(entry.thumbnail(), None);
    }

    #[test]
    fn unknown_media_type_is_an_image() {
        let json = r#"{"date": "2024-01-03", "media_type": "other", "url": "u"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.media_type, MediaType::Image);
        assert_eq!(entry.title, "");
    }

    #[test]
    fn video_with_thumbnail() {
        let json = r#"{
            "date": "2024-01-04",
            "title": "Launch",
            "media_type": "video",
            "url": "https://www.youtube.com/embed/abc",
            "thumbnail_url": "https://img.youtube.com/vi/abc/0.jpg"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert!(entry.is_video());
        assert_eq!(entry.thumbnail(), Some("https://img.youtube.com/vi/abc/0.jpg"));
    }

    #[test]
    fn best_image_url_falls_back_to_url() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let entry = Entry::new(date, "Moon", MediaType::Image).with_url("moon.jpg");
        assert_eq!(entry.best_image_url(), "moon.jpg");

        let entry = entry.with_hdurl("");
        assert_eq!(entry.best_image_url(), "moon.jpg");
    }
}
