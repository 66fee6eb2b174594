use super::theme::{ColorPair, Theme};
use crate::domain::{Detail, EmbeddedMedia, MediaPreview, ViewState};
use std::fmt::Write;

/// Plain-text rendering of gallery states for non-interactive commands.
pub struct TextRenderer {
    theme: Theme,
    color: bool,
}

impl TextRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme, color: true }
    }

    pub fn plain() -> Self {
        Self {
            theme: Theme::default(),
            color: false,
        }
    }

    fn paint(&self, text: &str, pair: &ColorPair, bold: bool) -> String {
        match (self.color, bold) {
            (false, _) => text.to_string(),
            (true, false) => pair.colorize(text),
            (true, true) => pair.colorize_bold(text),
        }
    }

    pub fn render_state(&self, state: &ViewState) -> String {
        let colors = &self.theme.colors;
        let mut out = String::new();

        match state {
            ViewState::Loading => {
                let _ = writeln!(out, "{}", self.paint("Loading space data...", &colors.loading, false));
            }
            ViewState::Error(message) => {
                let _ = writeln!(out, "{}", self.paint(message, &colors.banner, true));
            }
            ViewState::Ready(tiles) => {
                for tile in tiles {
                    let (badge, source) = match &tile.preview {
                        MediaPreview::Image { url } => ("▣", url.as_str()),
                        MediaPreview::Thumbnail { url } => ("▶", url.as_str()),
                        MediaPreview::TextPlaceholder(text) => ("▶", text.as_str()),
                        MediaPreview::Placeholder { url } => ("?", url.as_str()),
                    };
                    let _ = writeln!(
                        out,
                        "{} {}  {}",
                        self.paint(&tile.date.format("%Y-%m-%d").to_string(), &colors.date, false),
                        badge,
                        self.paint(&tile.title, &colors.title, true)
                    );
                    let _ = writeln!(out, "    {}", self.paint(source, &colors.media_url, false));
                }
            }
        }

        out
    }

    pub fn render_detail(&self, detail: &Detail) -> String {
        let colors = &self.theme.colors;
        let mut out = String::new();

        let _ = writeln!(out, "=== {} ===", self.paint(&detail.title, &colors.title, true));
        let _ = writeln!(out, "{}", self.paint(&detail.formatted_date(), &colors.date, false));
        match detail.media() {
            Some(EmbeddedMedia::Frame { url }) => {
                let _ = writeln!(out, "\n▶ Video: {}", url);
            }
            Some(EmbeddedMedia::Image { url }) => {
                let _ = writeln!(out, "\n▣ Image: {}", url);
            }
            None => {}
        }
        let _ = writeln!(out, "\n{}", detail.explanation);

        out
    }
}
