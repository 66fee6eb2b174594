//! Error types for the gallery

use thiserror::Error;

/// Banner text shown for every load failure.
pub const LOAD_FAILURE_MESSAGE: &str =
    "Failed to load space data. Please check your connection and restart.";

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Data source answered with status {0}")]
    Status(u16),

    #[error("Malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset has not been loaded")]
    NotLoaded,

    #[error("Only found {found} entries for the selected 9-day window")]
    InsufficientData { found: usize },

    #[error("No date selected")]
    EmptyDate,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Date is in the future: {0}")]
    FutureDate(String),

    #[error("No entry for {0}")]
    NoEntry(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;

impl GalleryError {
    /// Whether this error came from fetching the dataset.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            GalleryError::Http(_)
                | GalleryError::Status(_)
                | GalleryError::Json(_)
                | GalleryError::Io(_)
                | GalleryError::NotLoaded
        )
    }

    /// Text for the single error banner.
    pub fn user_message(&self) -> String {
        match self {
            e if e.is_load_failure() => LOAD_FAILURE_MESSAGE.to_string(),
            GalleryError::InsufficientData { found } => format!(
                "Only found {} entries for the selected 9-day window. Please choose a different date.",
                found
            ),
            GalleryError::EmptyDate => "Please select a date.".to_string(),
            GalleryError::InvalidDate(input) => {
                format!("Invalid date '{}'. Use YYYY-MM-DD.", input)
            }
            GalleryError::FutureDate(_) => "Date cannot be after today.".to_string(),
            GalleryError::NoEntry(date) => format!("No entry found for {}.", date),
            _ => self.to_string(),
        }
    }

    /// Process exit code for the command line.
    pub fn exit_code(&self) -> i32 {
        match self {
            e if e.is_load_failure() => 2,
            GalleryError::InsufficientData { .. } => 3,
            GalleryError::EmptyDate
            | GalleryError::InvalidDate(_)
            | GalleryError::FutureDate(_) => 4,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failures_share_one_message() {
        let status = GalleryError::Status(404);
        let io = GalleryError::Io(std::io::Error::other("boom"));
        assert_eq!(status.user_message(), LOAD_FAILURE_MESSAGE);
        assert_eq!(io.user_message(), LOAD_FAILURE_MESSAGE);
        assert_eq!(status.exit_code(), 2);
    }

    #[test]
    fn insufficient_data_reports_count() {
        let err = GalleryError::InsufficientData { found: 3 };
        assert!(!err.is_load_failure());
        assert!(err.user_message().starts_with("Only found 3 entries"));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn date_validation_messages() {
        assert_eq!(GalleryError::EmptyDate.user_message(), "Please select a date.");
        assert_eq!(
            GalleryError::InvalidDate("2024-13-01".into()).user_message(),
            "Invalid date '2024-13-01'. Use YYYY-MM-DD."
        );
        assert_eq!(
            GalleryError::FutureDate("2999-01-01".into()).user_message(),
            "Date cannot be after today."
        );
    }
}
