use std::time::Instant;

use crate::api::{ApiError, Page};
use crate::config::ConfigStore;
use crate::dashboard::notify::ToastLevel;
use crate::dashboard::pagination::FetchTicket;
use crate::dashboard::{Dashboard, Effect};
use crate::ui::layout::GridGeometry;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Grid,
    Search,
}

/// Terminal-side state around the headless dashboard: focus, cursor,
/// scroll position and viewport size.
pub struct App {
    should_quit: bool,
    focus: Focus,
    dashboard: Dashboard,
    config: ConfigStore,
    /// Index into the currently visible (filtered) cards.
    cursor: usize,
    /// First card row shown in the viewport.
    scroll: usize,
    grid: GridGeometry,
}

impl App {
    pub fn new(config: ConfigStore, dashboard: Dashboard) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Grid,
            dashboard,
            config,
            cursor: 0,
            scroll: 0,
            grid: GridGeometry::for_body(0, 0),
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn grid(&self) -> GridGeometry {
        self.grid
    }

    pub fn start(&mut self) -> Vec<Effect> {
        self.dashboard.start()
    }

    /// Body area changed size.
    pub fn on_resize(&mut self, width: u16, height: u16, now: Instant) {
        self.grid = GridGeometry::for_body(width, height);
        self.clamp_scroll();
        self.refresh_sentinel(now);
    }

    pub fn on_tick(&mut self, now: Instant) -> Vec<Effect> {
        self.dashboard.tick(now)
    }

    pub fn page_loaded(&mut self, ticket: FetchTicket, result: Result<Page, ApiError>, now: Instant) {
        self.dashboard.page_loaded(ticket, result);
        self.clamp_cursor();
        self.refresh_sentinel(now);
    }

    // -- Search ---------------------------------------------------------------

    pub fn push_search_char(&mut self, ch: char, now: Instant) {
        let mut query = self.dashboard.filter().query().to_string();
        query.push(ch);
        self.apply_search(query, now);
    }

    pub fn pop_search_char(&mut self, now: Instant) {
        let mut query = self.dashboard.filter().query().to_string();
        query.pop();
        self.apply_search(query, now);
    }

    fn apply_search(&mut self, query: String, now: Instant) {
        self.dashboard.set_search(query);
        self.cursor = 0;
        self.scroll = 0;
        self.refresh_sentinel(now);
    }

    // -- Grid navigation ------------------------------------------------------

    fn visible_count(&self) -> usize {
        self.dashboard
            .fetcher()
            .items()
            .filter(|dog| self.dashboard.filter().matches(dog))
            .count()
    }

    /// Rows occupied by cards, loading skeletons and the sentinel row.
    pub fn total_rows(&self) -> usize {
        let view = self.dashboard.view();
        let slots = view.visible_cards().count() + view.loading_placeholders;
        self.grid.rows_for(slots) + usize::from(view.sentinel_row)
    }

    /// Row index of the sentinel placeholder row, if drawn.
    pub fn sentinel_row(&self) -> Option<usize> {
        let view = self.dashboard.view();
        if !view.sentinel_row {
            return None;
        }
        let slots = view.visible_cards().count() + view.loading_placeholders;
        Some(self.grid.rows_for(slots))
    }

    pub fn move_cursor(&mut self, delta: isize, now: Instant) {
        let count = self.visible_count();
        if count == 0 {
            return;
        }
        let target = (self.cursor as isize + delta).clamp(0, count as isize - 1);
        self.cursor = target as usize;
        self.ensure_cursor_visible(count);
        self.refresh_sentinel(now);
    }

    pub fn move_row(&mut self, rows: isize, now: Instant) {
        self.move_cursor(rows * self.grid.columns as isize, now);
    }

    pub fn page(&mut self, pages: isize, now: Instant) {
        self.move_row(pages * self.grid.visible_rows as isize, now);
    }

    /// Mouse wheel: move the viewport without moving the cursor.
    pub fn scroll_by(&mut self, rows: isize, now: Instant) {
        self.scroll = (self.scroll as isize + rows).max(0) as usize;
        self.clamp_scroll();
        self.refresh_sentinel(now);
    }

    pub fn scroll_to_top(&mut self, now: Instant) {
        self.cursor = 0;
        self.scroll = 0;
        self.refresh_sentinel(now);
    }

    /// Scrolled further than one viewport height.
    pub fn show_back_to_top(&self) -> bool {
        self.scroll >= self.grid.visible_rows
    }

    pub fn toggle_current(&mut self) {
        let id = self
            .dashboard
            .view()
            .visible_cards()
            .nth(self.cursor)
            .map(|card| card.dog.id.clone());
        if let Some(id) = id {
            self.dashboard.toggle(&id);
        }
    }

    fn ensure_cursor_visible(&mut self, count: usize) {
        let row = self.grid.row_of(self.cursor);
        let last_row = self.grid.row_of(count - 1);
        if row < self.scroll {
            self.scroll = row;
        } else if row == last_row {
            // Bring the placeholder rows below the last card into view.
            self.scroll = self.max_scroll().min(row);
        } else if row >= self.scroll + self.grid.visible_rows {
            self.scroll = row + 1 - self.grid.visible_rows;
        }
    }

    fn max_scroll(&self) -> usize {
        self.total_rows().saturating_sub(self.grid.visible_rows)
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn clamp_cursor(&mut self) {
        let count = self.visible_count();
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }

    /// Recompute whether the sentinel row is inside the viewport.
    pub fn refresh_sentinel(&mut self, now: Instant) {
        let visible = self.sentinel_row().is_some_and(|row| {
            row >= self.scroll && row < self.scroll + self.grid.visible_rows
        });
        self.dashboard.sentinel_visibility(visible, now);
    }

    // -- Commands -------------------------------------------------------------

    pub fn retry_fetch(&mut self) -> Vec<Effect> {
        self.dashboard.fetch_next()
    }

    pub fn open_match(&mut self) -> Vec<Effect> {
        self.dashboard.open_match()
    }

    pub fn close_match(&mut self) {
        self.dashboard.close_match();
    }

    /// Re-read the config file and apply a changed listing query.
    ///
    /// The outcome is reported as a toast either way.
    pub fn reload_config(&mut self, now: Instant) -> Vec<Effect> {
        let key = match self.config.reload() {
            Ok(key) => key,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    path = %self.config.path().display(),
                    "Config reload failed"
                );
                self.dashboard
                    .notify(ToastLevel::Error, format!("Reload failed: {}", err), now);
                return Vec::new();
            }
        };
        self.dashboard.notify(ToastLevel::Info, "Config reloaded", now);
        let effects = self.dashboard.set_query(key);
        if !effects.is_empty() {
            self.cursor = 0;
            self.scroll = 0;
            self.refresh_sentinel(now);
        }
        effects
    }
}
