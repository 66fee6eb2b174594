use super::date_picker::DatePicker;
use super::theme::Theme;
use crate::application::{GalleryApp, today};
use crate::domain::{Detail, EmbeddedMedia, MediaPreview, Tile, ViewState};
use chrono::{Duration, NaiveDate};
use crossterm::ExecutableCommand;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind, poll,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::tty::IsTty;
use log::warn;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::io::{self, Stdout, stdout};

const GRID_COLUMNS: usize = 3;
const GRID_ROWS: usize = 3;
const TILE_COUNT: usize = GRID_COLUMNS * GRID_ROWS;

const PICKER_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;
const HELP_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Picker,
    Gallery,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusLine {
    Info(String),
    Error(String),
}

/// Screen regions, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone)]
pub struct ScreenLayout {
    pub picker: Rect,
    pub status: Rect,
    pub body: Rect,
    pub help: Rect,
    pub tiles: Vec<Rect>,
}

impl ScreenLayout {
    pub fn new(area: Rect, show_help: bool) -> Self {
        let help_height = if show_help { HELP_HEIGHT } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(PICKER_HEIGHT),
                Constraint::Length(STATUS_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(help_height),
            ])
            .split(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, GRID_ROWS as u32); GRID_ROWS])
            .split(chunks[2]);

        let tiles = rows
            .iter()
            .flat_map(|row| {
                Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                    .split(*row)
                    .to_vec()
            })
            .collect();

        Self {
            picker: chunks[0],
            status: chunks[1],
            body: chunks[2],
            help: chunks[3],
            tiles,
        }
    }

    pub fn tile_at(&self, column: u16, row: u16) -> Option<usize> {
        self.tiles
            .iter()
            .position(|rect| rect.contains(Position::new(column, row)))
    }
}

/// Area of the detail overlay: 80% of the screen, centered.
pub fn overlay_area(area: Rect) -> Rect {
    let width = area.width.saturating_mul(4) / 5;
    let height = area.height.saturating_mul(4) / 5;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Input handling and view state of the gallery screen.
pub struct GalleryController<'a> {
    app: &'a mut GalleryApp,
    picker: DatePicker,
    focus: Focus,
    selected: usize,
    detail_scroll: u16,
    status: Option<StatusLine>,
    show_help: bool,
    should_exit: bool,
    viewport: Rect,
}

impl<'a> GalleryController<'a> {
    pub fn new(app: &'a mut GalleryApp, initial_date: NaiveDate) -> Self {
        Self {
            picker: DatePicker::new(initial_date, today()),
            app,
            focus: Focus::Picker,
            selected: 0,
            detail_scroll: 0,
            status: None,
            show_help: false,
            should_exit: false,
            viewport: Rect::default(),
        }
    }

    /// Record the screen area of the last draw.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Load the dataset and show the first window.
    pub fn start(&mut self, end_date: NaiveDate) {
        self.app.start(end_date);
        self.after_explore();
    }

    pub fn app(&self) -> &GalleryApp {
        &*self.app
    }

    pub fn picker(&self) -> &DatePicker {
        &self.picker
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn detail_scroll(&self) -> u16 {
        self.detail_scroll
    }

    fn after_explore(&mut self) {
        self.selected = 0;
        self.detail_scroll = 0;
        self.picker.set(self.app.end_date());
        if !self.app.view_state().tiles().is_empty() {
            self.focus = Focus::Gallery;
        }
    }

    /// Run the filter for the picker's current value.
    pub fn explore_picker(&mut self) {
        let input = self.picker.value().to_string();
        match self.app.explore_input(&input) {
            Ok(_) => {
                self.status = None;
                self.after_explore();
            }
            Err(e) => {
                self.status = Some(StatusLine::Error(e.user_message()));
            }
        }
    }

    /// Move the window end by `days`, never past today.
    pub fn shift_window(&mut self, days: i64) {
        if !self.app.session().is_loaded() {
            return;
        }
        let end = (self.app.end_date() + Duration::days(days)).min(today());
        self.status = None;
        self.app.explore(end);
        self.after_explore();
    }

    pub fn open_selected(&mut self) {
        if self.app.select(self.selected).is_some() {
            self.detail_scroll = 0;
        }
    }

    pub fn close_detail(&mut self) {
        self.app.close_detail();
        self.detail_scroll = 0;
    }

    /// Furthest the detail text can scroll before its last line leaves the overlay.
    fn max_detail_scroll(&self) -> u16 {
        let Some(detail) = self.app.detail() else {
            return 0;
        };
        let inner = overlay_area(self.viewport);
        let width = inner.width.saturating_sub(2);
        let height = inner.height.saturating_sub(2);
        let lines = Paragraph::new(detail_lines(detail, &Theme::default()))
            .wrap(Wrap { trim: true })
            .line_count(width);
        u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .saturating_sub(height)
    }

    fn move_selection(&mut self, rows: isize, columns: isize) {
        let count = self.app.view_state().tiles().len();
        if count == 0 {
            return;
        }
        let row = (self.selected / GRID_COLUMNS) as isize + rows;
        let column = (self.selected % GRID_COLUMNS) as isize + columns;
        if !(0..GRID_ROWS as isize).contains(&row) || !(0..GRID_COLUMNS as isize).contains(&column)
        {
            return;
        }
        let index = row as usize * GRID_COLUMNS + column as usize;
        if index < count {
            self.selected = index;
        }
    }

    fn open_media(&mut self) {
        self.status = Some(match self.app.open_media() {
            Ok(browser) => StatusLine::Info(format!("Opened media in {}", browser)),
            Err(e) => {
                warn!("event=media_open status=error error={:#}", e);
                StatusLine::Error(format!("{:#}", e))
            }
        });
    }

    /// Handle keyboard input
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if matches!(
            (key.code, key.modifiers),
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('d'), KeyModifiers::CONTROL)
        ) {
            self.should_exit = true;
            return;
        }

        // The overlay is modal: nothing below it reacts while it is open.
        if self.app.detail().is_some() {
            self.handle_detail_key(key);
            return;
        }

        match self.focus {
            Focus::Picker => self.handle_picker_key(key),
            Focus::Gallery => self.handle_gallery_key(key),
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('c') => self.close_detail(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.detail_scroll = self
                    .detail_scroll
                    .saturating_add(1)
                    .min(self.max_detail_scroll());
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            }
            KeyCode::Char('o') => self.open_media(),
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_exit = true,
            KeyCode::Enter => self.explore_picker(),
            KeyCode::Tab => {
                if !self.app.view_state().tiles().is_empty() {
                    self.focus = Focus::Gallery;
                }
            }
            KeyCode::Backspace => self.picker.backspace(),
            KeyCode::Up => self.picker.step(1),
            KeyCode::Down => self.picker.step(-1),
            KeyCode::Char(c) => self.picker.insert(c),
            _ => {}
        }
    }

    fn handle_gallery_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Tab | KeyCode::Char('/') => self.focus = Focus::Picker,
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(0, 1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1, 0),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('[') => self.shift_window(-1),
            KeyCode::Char(']') => self.shift_window(1),
            KeyCode::Char('t') => self.shift_window((today() - self.app.end_date()).num_days()),
            KeyCode::Char('?') => self.show_help = !self.show_help,
            _ => {}
        }
    }

    /// Handle mouse input against the screen `area` that was last drawn.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);

        if self.app.detail().is_some() {
            if !overlay_area(area).contains(position) {
                self.close_detail();
            }
            return;
        }

        let layout = ScreenLayout::new(area, self.show_help);
        if layout.picker.contains(position) {
            self.focus = Focus::Picker;
            return;
        }
        if let Some(index) = layout.tile_at(mouse.column, mouse.row) {
            if index < self.app.view_state().tiles().len() {
                self.focus = Focus::Gallery;
                self.selected = index;
                self.open_selected();
            }
        }
    }
}

/// Draw the whole screen. Every call redraws from scratch.
pub fn render(frame: &mut Frame, controller: &GalleryController, theme: &Theme) {
    let area = frame.area();
    let layout = ScreenLayout::new(area, controller.show_help());

    frame.render_widget(create_picker(controller, theme), layout.picker);
    frame.render_widget(create_status(controller, theme), layout.status);

    match controller.app().view_state() {
        ViewState::Loading => {
            let loading = Paragraph::new(Line::from(Span::styled(
                "Loading space data...",
                theme.colors.loading.to_ratatui(),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(loading, centered_line(layout.body));
        }
        ViewState::Error(message) => {
            frame.render_widget(create_banner(message, theme), layout.body);
        }
        ViewState::Ready(tiles) => {
            let highlight = controller.focus() == Focus::Gallery;
            for (index, (tile, rect)) in tiles.iter().zip(&layout.tiles).take(TILE_COUNT).enumerate()
            {
                let is_selected = highlight && index == controller.selected();
                frame.render_widget(create_tile(tile, is_selected, theme), *rect);
            }
        }
    }

    if controller.show_help() {
        frame.render_widget(create_help_text(theme), layout.help);
    }

    if let Some(detail) = controller.app().detail() {
        let popup_area = overlay_area(area);
        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            create_detail(detail, controller.detail_scroll(), theme),
            popup_area,
        );
    }
}

fn centered_line(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: area.height.min(1),
    }
}

fn create_picker(controller: &GalleryController, theme: &Theme) -> Paragraph<'static> {
    let focused = controller.focus() == Focus::Picker && controller.app().detail().is_none();
    let value_style = if focused {
        theme.colors.focused_input.to_ratatui()
    } else {
        theme.colors.input.to_ratatui()
    };
    let cursor = if focused { "_" } else { " " };

    Paragraph::new(Line::from(vec![
        Span::styled("End date: ", theme.colors.dimmed.to_ratatui()),
        Span::styled(format!("{}{}", controller.picker().value(), cursor), value_style),
        Span::styled(
            format!("  (max {})", controller.picker().max()),
            theme.colors.dimmed.to_ratatui(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if focused {
                theme.colors.selected_border.to_ratatui()
            } else {
                theme.colors.border.to_ratatui()
            })
            .title(" Explore 9 days ")
            .title_style(theme.colors.help_text.to_ratatui()),
    )
}

fn create_status(controller: &GalleryController, theme: &Theme) -> Paragraph<'static> {
    let line = match controller.status() {
        Some(StatusLine::Error(text)) => {
            Line::from(Span::styled(text.clone(), theme.colors.banner.to_ratatui()))
        }
        Some(StatusLine::Info(text)) => {
            Line::from(Span::styled(text.clone(), theme.colors.help_text.to_ratatui()))
        }
        None => Line::from(Span::styled(
            "?=Help",
            theme.colors.dimmed.to_ratatui(),
        )),
    };
    Paragraph::new(line)
}

fn create_banner(message: &str, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        theme.colors.banner.to_ratatui_with_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.colors.banner.to_ratatui())
            .title(" Error "),
    )
}

fn preview_lines(preview: &MediaPreview, theme: &Theme) -> Vec<Line<'static>> {
    let url_line = |url: &str| {
        Line::from(Span::styled(
            url.to_string(),
            theme.colors.media_url.to_ratatui(),
        ))
    };

    match preview {
        MediaPreview::Image { url } => vec![
            Line::from(Span::styled("▣ Image", theme.colors.dimmed.to_ratatui())),
            url_line(url),
        ],
        MediaPreview::Thumbnail { url } => vec![
            Line::from(Span::styled(
                "▶ Video",
                theme.colors.video_badge.to_ratatui_with_modifier(Modifier::BOLD),
            )),
            url_line(url),
        ],
        MediaPreview::TextPlaceholder(text) => vec![Line::from(Span::styled(
            format!("▶ {}", text),
            theme.colors.placeholder.to_ratatui(),
        ))],
        MediaPreview::Placeholder { url } => vec![
            Line::from(Span::styled(
                "▣ Preview unavailable",
                theme.colors.placeholder.to_ratatui(),
            )),
            url_line(url),
        ],
    }
}

fn create_tile(tile: &Tile, is_selected: bool, theme: &Theme) -> Paragraph<'static> {
    let mut lines = preview_lines(&tile.preview, theme);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        tile.title.clone(),
        theme.colors.title.to_ratatui_with_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        tile.date.format("%Y-%m-%d").to_string(),
        theme.colors.date.to_ratatui(),
    )));

    let border_style = if is_selected {
        theme.colors.selected_border.to_ratatui_with_modifier(Modifier::BOLD)
    } else {
        theme.colors.border.to_ratatui()
    };

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(border_style))
}

fn detail_lines(detail: &Detail, theme: &Theme) -> Vec<Line<'static>> {
    let media_line = match detail.media() {
        Some(EmbeddedMedia::Frame { url }) => Line::from(vec![
            Span::styled(
                "▶ Embedded player: ",
                theme.colors.video_badge.to_ratatui_with_modifier(Modifier::BOLD),
            ),
            Span::styled(url.clone(), theme.colors.media_url.to_ratatui()),
        ]),
        Some(EmbeddedMedia::Image { url }) => Line::from(vec![
            Span::styled("▣ Image: ", theme.colors.dimmed.to_ratatui()),
            Span::styled(url.clone(), theme.colors.media_url.to_ratatui()),
        ]),
        None => Line::from(""),
    };

    vec![
        Line::from(Span::styled(
            detail.formatted_date(),
            theme.colors.date.to_ratatui(),
        )),
        Line::from(""),
        media_line,
        Line::from(""),
        Line::from(Span::styled(
            detail.explanation.clone(),
            theme.colors.overlay_text.to_ratatui(),
        )),
    ]
}

fn create_detail(detail: &Detail, scroll: u16, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(detail_lines(detail, theme))
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.colors.overlay_border.to_ratatui())
                .title(format!(" {} ", detail.title))
                .title_style(theme.colors.title.to_ratatui_with_modifier(Modifier::BOLD))
                .title_bottom(Line::from(Span::styled(
                    " o=Open media • ↑↓=Scroll • x/Esc=Close ",
                    theme.colors.help_text.to_ratatui(),
                ))),
        )
}

fn create_help_text(theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        "Tab=Picker/Gallery • ←↑↓→/hjkl=Move • Enter=Explore/Open • [ ]=Shift day • t=Today • ?=Help • q=Quit",
        theme.colors.help_text.to_ratatui(),
    )))
    .alignment(Alignment::Center)
}

/// Terminal session around a [`GalleryController`].
pub struct GalleryView<'a> {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    controller: GalleryController<'a>,
    theme: Theme,
    last_area: Rect,
}

impl<'a> GalleryView<'a> {
    pub fn new(app: &'a mut GalleryApp, initial_date: NaiveDate, theme: Theme) -> io::Result<Self> {
        if !IsTty::is_tty(&std::io::stdout()) {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "Not running in a TTY, cannot initialize terminal interface",
            ));
        }

        enable_raw_mode()
            .map_err(|e| io::Error::other(format!("Failed to enable raw mode: {}", e)))?;

        let mut out = stdout();
        let entered = out
            .execute(EnterAlternateScreen)
            .and_then(|out| out.execute(EnableMouseCapture))
            .map(|_| ());
        if let Err(e) = entered {
            let _ = disable_raw_mode();
            return Err(io::Error::other(format!(
                "Failed to enter alternate screen: {}",
                e
            )));
        }

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend).map_err(|e| {
            let _ = disable_raw_mode();
            let _ = stdout().execute(DisableMouseCapture);
            let _ = stdout().execute(LeaveAlternateScreen);
            io::Error::other(format!("Failed to create terminal: {}", e))
        })?;

        Ok(Self {
            terminal,
            controller: GalleryController::new(app, initial_date),
            theme,
            last_area: Rect::default(),
        })
    }

    fn draw(&mut self) -> io::Result<()> {
        let controller = &self.controller;
        let theme = &self.theme;
        let mut area = Rect::default();
        self.terminal.draw(|frame| {
            area = frame.area();
            render(frame, controller, theme);
        })?;
        self.last_area = area;
        self.controller.set_viewport(area);
        Ok(())
    }

    /// Show the loading state, fetch the dataset, then run the event loop.
    pub fn run(&mut self, end_date: NaiveDate) -> io::Result<()> {
        self.draw()?;
        self.controller.start(end_date);

        while !self.controller.should_exit() {
            self.draw()?;

            if !poll(std::time::Duration::from_millis(100))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.controller.handle_key_event(key),
                Event::Mouse(mouse) => self.controller.handle_mouse_event(mouse, self.last_area),
                _ => continue,
            }
        }

        self.cleanup()
    }

    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        self.terminal.backend_mut().execute(DisableMouseCapture)?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl<'a> Drop for GalleryView<'a> {
    fn drop(&mut self) {
        // Fallback cleanup if the loop exited early
        let _ = self.cleanup();
    }
}
