use crate::application::{Config, GalleryApp, GalleryView, TextRenderer, Theme, today};
use crate::domain::{Detail, parse_end_date};
use crate::infrastructure::{active_log_dir, init_logging};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apod-gallery")]
#[command(about = "Browse nine days of astronomy pictures in the terminal")]
#[command(version)]
pub struct Cli {
    /// Dataset URL (overrides APOD_DATA_URL)
    #[arg(long, global = true)]
    pub data_url: Option<String>,

    /// Read the dataset from a local JSON file instead of the network
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Color theme: dark, light or minimal
    #[arg(long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive gallery (default)
    Tui {
        /// Last day of the window (YYYY-MM-DD format, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Print the 9-day window ending on a date
    List {
        /// Last day of the window (YYYY-MM-DD format, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Replace unreachable previews with placeholders
        #[arg(long)]
        check_media: bool,
    },
    /// Print the full detail of one entry
    Show {
        /// Day of the entry (YYYY-MM-DD format)
        #[arg(short, long)]
        date: String,
    },
    /// Check that the terminal supports the interactive gallery
    CheckTerminal,
}

/// Resolve an optional `--date` argument, defaulting to today.
fn resolve_date(date: Option<String>) -> anyhow::Result<NaiveDate> {
    let today = today();
    match date {
        Some(date_str) => Ok(parse_end_date(&date_str, today)?),
        None => Ok(today),
    }
}

/// Render the window ending on `end` for the `list` command.
///
/// Filter failures are returned rather than rendered, so they are reported once.
pub fn render_window(
    app: &mut GalleryApp,
    end: NaiveDate,
    renderer: &TextRenderer,
) -> crate::error::Result<String> {
    let state = app.try_explore(end)?;
    Ok(renderer.render_state(state))
}

/// Look up a theme by name, warning when the name is not one we ship.
fn resolve_theme(name: &str) -> Theme {
    let available = Theme::available_themes();
    if !available.contains(&name.to_lowercase()) {
        log::warn!(
            "event=theme_unknown name={} available={} fallback=dark",
            name,
            available.join(",")
        );
    }
    Theme::by_name(name)
}

impl Cli {
    pub fn config(&self) -> Config {
        let mut config = Config::from_env();
        if let Some(url) = &self.data_url {
            config.data_url = url.clone();
        }
        if let Some(path) = &self.data_file {
            config.data_file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        config
    }

    pub fn run() -> anyhow::Result<()> {
        let cli = Self::parse();
        let config = cli.config();

        if let Err(e) = init_logging(&config.log_level, &config.log_dir) {
            eprintln!("Warning: logging disabled: {}", e);
        }
        if let Some(dir) = active_log_dir() {
            log::debug!("event=cli_start log_dir={}", dir.display());
        }

        let theme = resolve_theme(&config.theme);
        let mut app = GalleryApp::new(config);

        match cli.command {
            Some(Commands::Tui { date }) => {
                let target_date = resolve_date(date)?;
                let mut view = GalleryView::new(&mut app, target_date, theme)?;
                view.run(target_date)?;
            }
            None => {
                let target_date = today();
                let mut view = GalleryView::new(&mut app, target_date, theme)?;
                view.run(target_date)?;
            }
            Some(Commands::List { date, check_media }) => {
                let target_date = resolve_date(date)?;
                app.config.probe_media = check_media;
                app.load()?;

                let renderer = TextRenderer::new(theme);
                print!("{}", render_window(&mut app, target_date, &renderer)?);
            }
            Some(Commands::Show { date }) => {
                let target_date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
                    .map_err(|_| crate::error::GalleryError::InvalidDate(date.clone()))?;
                app.load()?;

                let detail = Detail::open(app.session().find(target_date)?);
                print!("{}", TextRenderer::new(theme).render_detail(&detail));
            }
            Some(Commands::CheckTerminal) => {
                crate::application::test_terminal_setup()?;
            }
        }

        Ok(())
    }
}
