//! Rendering boundary: what a front-end needs to draw the dashboard.
//!
//! Views borrow from the page cache; nothing here is copied out of it.

use crate::api::Dog;
use crate::config::{DisplayConfig, ThemeName};

use super::notify::Toast;

/// Presentation settings passed explicitly to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub placeholder_rows: usize,
    pub theme: ThemeName,
    /// Shown in the title, e.g. "Find a pet (develop)".
    pub env_label: &'static str,
}

impl RenderOptions {
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self {
            placeholder_rows: display.placeholder_rows,
            theme: display.theme,
            env_label: if cfg!(debug_assertions) {
                "develop"
            } else {
                "production"
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView<'a> {
    pub dog: &'a Dog,
    /// The dog is in the favourites selection.
    pub checked: bool,
    /// The dog passes the search filter. Hidden cards stay in the list.
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchView<'a> {
    Hidden,
    Loading,
    Found(&'a Dog),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView<'a> {
    pub cards: Vec<CardView<'a>>,
    /// Pages arrived but none had dogs.
    pub empty_result: bool,
    /// Skeleton cards to draw while a page is loading.
    pub loading_placeholders: usize,
    /// Draw the placeholder row that hosts the scroll sentinel.
    pub sentinel_row: bool,
    pub error: Option<&'a str>,
    pub selected: usize,
    pub search: &'a str,
    pub match_view: MatchView<'a>,
    pub toast: Option<&'a Toast>,
    pub options: &'a RenderOptions,
}

impl<'a> DashboardView<'a> {
    pub fn visible_cards(&self) -> impl Iterator<Item = &CardView<'a>> + '_ {
        self.cards.iter().filter(|card| card.visible)
    }
}
