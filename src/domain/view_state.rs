use crate::domain::{Entry, Tile};
use crate::error::GalleryError;

/// What the gallery area shows. Exactly one state is visible at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    Ready(Vec<Tile>),
}

impl ViewState {
    /// Build the next state from a filter outcome.
    ///
    /// Each call produces a complete replacement for the previous state.
    pub fn from_filter(result: Result<Vec<Entry>, GalleryError>) -> Self {
        match result {
            Ok(entries) => ViewState::Ready(entries.iter().map(Tile::from_entry).collect()),
            Err(e) => ViewState::from_error(&e),
        }
    }

    pub fn from_error(error: &GalleryError) -> Self {
        ViewState::Error(error.user_message())
    }

    pub fn tiles(&self) -> &[Tile] {
        match self {
            ViewState::Ready(tiles) => tiles,
            _ => &[],
        }
    }

    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        match self {
            ViewState::Ready(tiles) => tiles,
            _ => &mut [],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}
