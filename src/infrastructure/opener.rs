use anyhow::{Context, Result};
use log::info;
use std::process::{Command, Stdio};

/// Hands media URLs to a web browser.
///
/// Uses the platform's default browser unless a program is configured.
pub struct MediaOpener {
    program: Option<String>,
}

impl MediaOpener {
    pub fn new(program: Option<String>) -> Self {
        Self { program }
    }

    /// Name shown to the user after a successful open.
    pub fn label(&self) -> &str {
        self.program.as_deref().unwrap_or("default browser")
    }

    /// Open `url` without waiting for the browser.
    pub fn open(&self, url: &str) -> Result<()> {
        match &self.program {
            // Output is discarded so the terminal view stays intact.
            Some(program) => {
                Command::new(program)
                    .arg(url)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                    .with_context(|| format!("Failed to launch '{}'", program))?;
            }
            None => {
                webbrowser::open(url).context("Failed to open the default browser")?;
            }
        }

        info!("event=media_open opener={} url={}", self.label(), url);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_an_error() {
        let opener = MediaOpener::new(Some("apod-gallery-no-such-opener".to_string()));
        let err = opener.open("https://example.org").unwrap_err();
        assert!(err.to_string().contains("apod-gallery-no-such-opener"));
    }

    #[test]
    fn label_names_the_browser_in_use() {
        assert_eq!(MediaOpener::new(None).label(), "default browser");
        assert_eq!(MediaOpener::new(Some("firefox".to_string())).label(), "firefox");
    }
}
