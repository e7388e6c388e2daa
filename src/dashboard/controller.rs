//! Dashboard controller: composes selection, pagination, the scroll
//! trigger, the text filter and the match dialog.
//!
//! Every method runs to completion on the UI thread. Network work is
//! returned as [`Effect`]s for the runtime to execute; the outcome comes
//! back through `page_loaded` / `match_finished`.

use std::time::{Duration, Instant};

use crate::api::{ApiError, Dog, MatchResponse, Page, QueryKey};
use crate::config::DisplayConfig;

use super::filter::TextFilter;
use super::matching::{MatchDialogState, MatchIntent, MatchReducer};
use super::mvi::Reducer;
use super::notify::{Notifications, ToastLevel};
use super::pagination::{FetchOutcome, FetchTicket, PageFetcher, TicketedRequest};
use super::selection::{SelectionIntent, SelectionReducer, SelectionState};
use super::trigger::{ScrollTrigger, SentinelId};
use super::view::{CardView, DashboardView, MatchView, RenderOptions};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Side effects requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPage(TicketedRequest),
    SubmitMatch { submission: u64, ids: Vec<String> },
}

pub struct Dashboard {
    selection: SelectionState,
    fetcher: PageFetcher,
    trigger: ScrollTrigger,
    sentinel: SentinelId,
    filter: TextFilter,
    match_dialog: MatchDialogState,
    submissions: u64,
    notifications: Notifications,
    options: RenderOptions,
}

impl Dashboard {
    pub fn new(key: QueryKey, page_size: u32, display: &DisplayConfig) -> Self {
        let mut trigger = ScrollTrigger::new(Duration::from_millis(display.scroll_debounce_ms));
        let sentinel = trigger.subscribe();
        Self {
            selection: SelectionState::default(),
            fetcher: PageFetcher::new(key, page_size),
            trigger,
            sentinel,
            filter: TextFilter::default(),
            match_dialog: MatchDialogState::default(),
            submissions: 0,
            notifications: Notifications::new(Duration::from_secs(display.toast_seconds)),
            options: RenderOptions::from_config(display),
        }
    }

    /// Request the first page for the current query.
    pub fn start(&mut self) -> Vec<Effect> {
        self.fetch_next()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn fetcher(&self) -> &PageFetcher {
        &self.fetcher
    }

    pub fn filter(&self) -> &TextFilter {
        &self.filter
    }

    pub fn match_dialog(&self) -> &MatchDialogState {
        &self.match_dialog
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    // -- Selection ------------------------------------------------------------

    /// Toggle a favourite. Only loaded dogs can be added.
    pub fn toggle(&mut self, id: &str) {
        if !self.selection.contains(id) && self.fetcher.find(id).is_none() {
            tracing::debug!(id, "Ignoring toggle for dog that is not loaded");
            return;
        }
        dispatch_mvi!(
            self,
            selection,
            SelectionReducer,
            SelectionIntent::Toggle { id: id.to_string() }
        );
    }

    pub fn clear_selection(&mut self) {
        dispatch_mvi!(self, selection, SelectionReducer, SelectionIntent::Clear);
    }

    // -- Search ---------------------------------------------------------------

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter = TextFilter::new(query);
    }

    // -- Pagination -----------------------------------------------------------

    /// Replace the listing query; restarts pagination when it changed.
    pub fn set_query(&mut self, key: QueryKey) -> Vec<Effect> {
        if !self.fetcher.set_query(key) {
            return Vec::new();
        }
        self.reset_sentinel();
        self.fetch_next()
    }

    /// Ask for the next page; empty when in flight or exhausted.
    pub fn fetch_next(&mut self) -> Vec<Effect> {
        self.fetcher
            .fetch_next()
            .map(Effect::FetchPage)
            .into_iter()
            .collect()
    }

    pub fn page_loaded(&mut self, ticket: FetchTicket, result: Result<Page, ApiError>) {
        if let FetchOutcome::Appended { has_more: true, .. } = self.fetcher.complete(ticket, result) {
            // The placeholder row moved below the new cards: observe it afresh.
            self.reset_sentinel();
        }
    }

    fn reset_sentinel(&mut self) {
        self.trigger.unsubscribe(self.sentinel);
        self.sentinel = self.trigger.subscribe();
    }

    /// Report whether the sentinel placeholder row is on screen.
    pub fn sentinel_visibility(&mut self, visible: bool, now: Instant) {
        if let Some(event) = self.trigger.observe(self.sentinel, visible, now) {
            tracing::trace!(?event, "Sentinel visibility changed");
        }
    }

    /// Advance timers: debounced scroll trigger and toast expiry.
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        self.notifications.expire(now);
        if self.trigger.poll(now) {
            self.fetch_next()
        } else {
            Vec::new()
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.trigger.next_deadline()
    }

    // -- Match ----------------------------------------------------------------

    /// Open the match dialog. Submits exactly once per closed→open.
    pub fn open_match(&mut self) -> Vec<Effect> {
        if self.match_dialog.is_open() {
            return Vec::new();
        }

        self.submissions += 1;
        let submission = self.submissions;
        let ids = self.selection.ids().to_vec();
        dispatch_mvi!(
            self,
            match_dialog,
            MatchReducer,
            MatchIntent::Open {
                submission,
                selection: ids.clone(),
            }
        );
        tracing::info!(submission, favourites = ids.len(), "Opening match dialog");
        vec![Effect::SubmitMatch { submission, ids }]
    }

    pub fn match_finished(
        &mut self,
        submission: u64,
        result: Result<MatchResponse, ApiError>,
        now: Instant,
    ) {
        let pending = self.match_dialog.is_submitting()
            && self.match_dialog.submission() == Some(submission);
        if !pending {
            tracing::debug!(submission, "Ignoring late match response");
            return;
        }
        match result {
            Ok(resp) => {
                dispatch_mvi!(
                    self,
                    match_dialog,
                    MatchReducer,
                    MatchIntent::Resolved {
                        submission,
                        match_id: resp.match_id,
                    }
                );
            }
            Err(err) => {
                let message = err.user_message();
                self.notifications.push(ToastLevel::Error, message.clone(), now);
                dispatch_mvi!(
                    self,
                    match_dialog,
                    MatchReducer,
                    MatchIntent::Failed {
                        submission,
                        message,
                    }
                );
            }
        }
    }

    /// Queue a notice raised outside the listing and match flows.
    pub fn notify(&mut self, level: ToastLevel, message: impl Into<String>, now: Instant) {
        self.notifications.push(level, message, now);
    }

    pub fn close_match(&mut self) {
        dispatch_mvi!(self, match_dialog, MatchReducer, MatchIntent::Close);
    }

    /// The matched dog, looked up across every loaded page.
    pub fn resolve_match(&self) -> Option<&Dog> {
        self.match_dialog
            .match_id()
            .and_then(|id| self.fetcher.find(id))
    }

    pub fn match_view(&self) -> MatchView<'_> {
        match &self.match_dialog {
            MatchDialogState::Closed => MatchView::Hidden,
            MatchDialogState::Submitting { .. } => MatchView::Loading,
            MatchDialogState::Settled { .. } => match self.resolve_match() {
                Some(dog) => MatchView::Found(dog),
                None => MatchView::NotFound,
            },
            MatchDialogState::Failed { .. } => MatchView::NotFound,
        }
    }

    // -- View -----------------------------------------------------------------

    pub fn view(&self) -> DashboardView<'_> {
        let cards = self
            .fetcher
            .items()
            .map(|dog| CardView {
                dog,
                checked: self.selection.contains(&dog.id),
                visible: self.filter.matches(dog),
            })
            .collect();

        let loading_placeholders = if self.fetcher.is_fetching() {
            self.options.placeholder_rows
        } else {
            0
        };

        DashboardView {
            cards,
            empty_result: self.fetcher.is_empty_result(),
            loading_placeholders,
            sentinel_row: self.fetcher.has_next_page() && !self.fetcher.pages().is_empty(),
            error: self.fetcher.last_error(),
            selected: self.selection.len(),
            search: self.filter.query(),
            match_view: self.match_view(),
            toast: self.notifications.latest(),
            options: &self.options,
        }
    }
}
