use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATA_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

pub struct Config {
    pub data_url: String,
    pub data_file: Option<PathBuf>,
    pub log_dir: PathBuf,
    pub log_level: String,
    pub http_timeout: Duration,
    /// Browser override from `$BROWSER`; the system default when unset.
    pub opener: Option<String>,
    pub probe_media: bool,
    pub theme: String,
}

impl Config {
    pub fn from_env() -> Self {
        let data_url =
            std::env::var("APOD_DATA_URL").unwrap_or_else(|_| DEFAULT_DATA_URL.to_string());

        let data_file = std::env::var("APOD_DATA_FILE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let log_dir = std::env::var("APOD_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::data_local_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("apod-gallery")
                    .join("logs")
            });

        let log_level = std::env::var("APOD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let http_timeout = std::env::var("APOD_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        let opener = browser_override(std::env::var("BROWSER").ok());

        let theme = std::env::var("APOD_THEME").unwrap_or_else(|_| "dark".to_string());

        Self {
            data_url,
            data_file,
            log_dir,
            log_level,
            http_timeout,
            opener,
            probe_media: false,
            theme,
        }
    }
}

/// Treat an empty `$BROWSER` the same as an unset one.
fn browser_override(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
