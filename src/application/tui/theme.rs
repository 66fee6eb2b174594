use crossterm::style::{Color as CrosstermColor, Stylize};
use ratatui::style::{Color as RatatuiColor, Modifier, Style as RatatuiStyle};

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Tiles
    pub title: ColorPair,
    pub date: ColorPair,
    pub border: ColorPair,
    pub selected_border: ColorPair,
    pub video_badge: ColorPair,
    pub placeholder: ColorPair,
    pub media_url: ColorPair,

    // Picker and states
    pub input: ColorPair,
    pub focused_input: ColorPair,
    pub loading: ColorPair,
    pub banner: ColorPair,

    // Overlay
    pub overlay_border: ColorPair,
    pub overlay_text: ColorPair,

    // Text
    pub dimmed: ColorPair,
    pub help_text: ColorPair,
}

#[derive(Debug, Clone)]
pub struct ColorPair {
    pub fg: CrosstermColor,
    pub bg: Option<CrosstermColor>,
}

impl ColorPair {
    pub fn new(fg: CrosstermColor) -> Self {
        Self { fg, bg: None }
    }

    pub fn with_bg(fg: CrosstermColor, bg: CrosstermColor) -> Self {
        Self { fg, bg: Some(bg) }
    }

    /// Convert to ratatui style
    pub fn to_ratatui(&self) -> RatatuiStyle {
        let mut style = RatatuiStyle::default().fg(Self::crossterm_to_ratatui(self.fg));
        if let Some(bg) = self.bg {
            style = style.bg(Self::crossterm_to_ratatui(bg));
        }
        style
    }

    fn crossterm_to_ratatui(color: CrosstermColor) -> RatatuiColor {
        match color {
            CrosstermColor::Black => RatatuiColor::Black,
            CrosstermColor::DarkRed => RatatuiColor::Red,
            CrosstermColor::DarkGreen => RatatuiColor::Green,
            CrosstermColor::DarkYellow => RatatuiColor::Yellow,
            CrosstermColor::DarkBlue => RatatuiColor::Blue,
            CrosstermColor::DarkMagenta => RatatuiColor::Magenta,
            CrosstermColor::DarkCyan => RatatuiColor::Cyan,
            CrosstermColor::Grey => RatatuiColor::Gray,
            CrosstermColor::DarkGrey => RatatuiColor::DarkGray,
            CrosstermColor::Red => RatatuiColor::LightRed,
            CrosstermColor::Green => RatatuiColor::LightGreen,
            CrosstermColor::Yellow => RatatuiColor::LightYellow,
            CrosstermColor::Blue => RatatuiColor::LightBlue,
            CrosstermColor::Magenta => RatatuiColor::LightMagenta,
            CrosstermColor::Cyan => RatatuiColor::LightCyan,
            CrosstermColor::White => RatatuiColor::White,
            CrosstermColor::Rgb { r, g, b } => RatatuiColor::Rgb(r, g, b),
            CrosstermColor::AnsiValue(v) => RatatuiColor::Indexed(v),
            _ => RatatuiColor::White,
        }
    }

    pub fn to_ratatui_with_modifier(&self, modifier: Modifier) -> RatatuiStyle {
        self.to_ratatui().add_modifier(modifier)
    }

    /// Apply color to text for plain terminal output
    pub fn colorize(&self, text: &str) -> String {
        let mut styled = text.with(self.fg);
        if let Some(bg) = self.bg {
            styled = styled.on(bg);
        }
        format!("{}", styled)
    }

    pub fn colorize_bold(&self, text: &str) -> String {
        let mut styled = text.with(self.fg).bold();
        if let Some(bg) = self.bg {
            styled = styled.on(bg);
        }
        format!("{}", styled)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            colors: ThemeColors {
                title: ColorPair::new(CrosstermColor::White),
                date: ColorPair::new(CrosstermColor::DarkCyan),
                border: ColorPair::new(CrosstermColor::DarkGrey),
                selected_border: ColorPair::new(CrosstermColor::Blue),
                video_badge: ColorPair::new(CrosstermColor::Magenta),
                placeholder: ColorPair::new(CrosstermColor::DarkYellow),
                media_url: ColorPair::new(CrosstermColor::Grey),

                input: ColorPair::new(CrosstermColor::White),
                focused_input: ColorPair::with_bg(
                    CrosstermColor::White,
                    CrosstermColor::Rgb { r: 40, g: 40, b: 60 },
                ),
                loading: ColorPair::new(CrosstermColor::DarkCyan),
                banner: ColorPair::new(CrosstermColor::Red),

                overlay_border: ColorPair::new(CrosstermColor::Cyan),
                overlay_text: ColorPair::new(CrosstermColor::White),

                dimmed: ColorPair::new(CrosstermColor::DarkGrey),
                help_text: ColorPair::new(CrosstermColor::DarkCyan),
            },
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ThemeColors {
                title: ColorPair::new(CrosstermColor::Black),
                date: ColorPair::new(CrosstermColor::DarkBlue),
                border: ColorPair::new(CrosstermColor::Grey),
                selected_border: ColorPair::new(CrosstermColor::DarkBlue),
                video_badge: ColorPair::new(CrosstermColor::DarkMagenta),
                placeholder: ColorPair::new(CrosstermColor::DarkYellow),
                media_url: ColorPair::new(CrosstermColor::DarkGrey),

                input: ColorPair::new(CrosstermColor::Black),
                focused_input: ColorPair::with_bg(
                    CrosstermColor::Black,
                    CrosstermColor::Rgb { r: 225, g: 230, b: 245 },
                ),
                loading: ColorPair::new(CrosstermColor::DarkBlue),
                banner: ColorPair::new(CrosstermColor::DarkRed),

                overlay_border: ColorPair::new(CrosstermColor::DarkBlue),
                overlay_text: ColorPair::new(CrosstermColor::Black),

                dimmed: ColorPair::new(CrosstermColor::Grey),
                help_text: ColorPair::new(CrosstermColor::DarkBlue),
            },
        }
    }

    pub fn minimal() -> Self {
        Self {
            name: "Minimal".to_string(),
            colors: ThemeColors {
                title: ColorPair::new(CrosstermColor::White),
                date: ColorPair::new(CrosstermColor::Grey),
                border: ColorPair::new(CrosstermColor::DarkGrey),
                selected_border: ColorPair::new(CrosstermColor::White),
                video_badge: ColorPair::new(CrosstermColor::White),
                placeholder: ColorPair::new(CrosstermColor::Grey),
                media_url: ColorPair::new(CrosstermColor::DarkGrey),

                input: ColorPair::new(CrosstermColor::White),
                focused_input: ColorPair::with_bg(
                    CrosstermColor::White,
                    CrosstermColor::Rgb { r: 28, g: 28, b: 28 },
                ),
                loading: ColorPair::new(CrosstermColor::White),
                banner: ColorPair::new(CrosstermColor::White),

                overlay_border: ColorPair::new(CrosstermColor::White),
                overlay_text: ColorPair::new(CrosstermColor::White),

                dimmed: ColorPair::new(CrosstermColor::DarkGrey),
                help_text: ColorPair::new(CrosstermColor::Grey),
            },
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "minimal" => Self::minimal(),
            _ => Self::dark(), // default
        }
    }

    pub fn available_themes() -> Vec<String> {
        vec!["dark".to_string(), "light".to_string(), "minimal".to_string()]
    }
}
