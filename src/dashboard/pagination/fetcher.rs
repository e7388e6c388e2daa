use crate::api::{ApiError, Dog, Page, PageRequest, QueryKey};

use super::cache::PageCache;
use super::state::FetchState;

/// Identifies one issued page request.
///
/// `generation` changes whenever the query key changes, so a response
/// that started under an older key can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    sequence: u64,
}

/// A page request the runtime must execute, tagged for `complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketedRequest {
    pub ticket: FetchTicket,
    pub request: PageRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Appended { items: usize, has_more: bool },
    /// Response for a superseded query or request; ignored.
    Stale,
    Failed { message: String },
}

/// Cursor-driven page fetcher for a single active query.
#[derive(Debug)]
pub struct PageFetcher {
    key: QueryKey,
    page_size: u32,
    cache: PageCache,
    state: FetchState,
    generation: u64,
    sequence: u64,
    in_flight: Option<FetchTicket>,
    last_error: Option<String>,
}

impl PageFetcher {
    pub fn new(key: QueryKey, page_size: u32) -> Self {
        Self {
            key,
            page_size,
            cache: PageCache::new(),
            state: FetchState::Idle,
            generation: 0,
            sequence: 0,
            in_flight: None,
            last_error: None,
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    /// A page request is outstanding (first or follow-up page).
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// False only once a page without a next cursor has arrived.
    pub fn has_next_page(&self) -> bool {
        self.state != FetchState::IdleExhausted
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn pages(&self) -> &[Page] {
        self.cache.pages(&self.key)
    }

    /// Every loaded dog, in fetch order.
    pub fn items(&self) -> impl Iterator<Item = &Dog> + '_ {
        self.cache.items(&self.key)
    }

    pub fn find(&self, id: &str) -> Option<&Dog> {
        self.items().find(|dog| dog.id == id)
    }

    /// At least one page arrived and none of them had any dogs.
    pub fn is_empty_result(&self) -> bool {
        let pages = self.pages();
        !pages.is_empty() && pages.iter().all(|page| page.items.is_empty())
    }

    /// Switch to a new query, dropping pages fetched under the old one.
    ///
    /// Returns `false` when the key is unchanged. Any in-flight request
    /// becomes stale.
    pub fn set_query(&mut self, key: QueryKey) -> bool {
        if key == self.key {
            return false;
        }

        tracing::info!(sort = %key.sort, "Query changed, restarting pagination");
        self.cache.invalidate(&self.key);
        self.key = key;
        self.generation += 1;
        self.in_flight = None;
        self.state = FetchState::Idle;
        self.last_error = None;
        true
    }

    /// Claim the next page request.
    ///
    /// Returns `None` while a request is in flight or once pagination is
    /// exhausted; otherwise the caller must execute the request and hand
    /// the result to `complete`.
    pub fn fetch_next(&mut self) -> Option<TicketedRequest> {
        if self.in_flight.is_some() {
            tracing::trace!("fetch_next ignored: request in flight");
            return None;
        }
        if !self.has_next_page() {
            tracing::trace!("fetch_next ignored: no more pages");
            return None;
        }

        let cursor = self.pages().last().and_then(|page| page.next.clone());
        self.state = if self.pages().is_empty() {
            FetchState::LoadingInitial
        } else {
            FetchState::LoadingNext
        };

        self.sequence += 1;
        let ticket = FetchTicket {
            generation: self.generation,
            sequence: self.sequence,
        };
        self.in_flight = Some(ticket);

        Some(TicketedRequest {
            ticket,
            request: PageRequest {
                key: self.key.clone(),
                cursor,
                size: self.page_size,
            },
        })
    }

    /// Record the result of a request handed out by `fetch_next`.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Page, ApiError>) -> FetchOutcome {
        if self.in_flight != Some(ticket) {
            tracing::warn!(
                generation = ticket.generation,
                current = self.generation,
                "Discarding stale page response"
            );
            return FetchOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                let items = page.items.len();
                let has_more = page.next.is_some();
                self.cache.append(&self.key, page);
                self.state = if has_more {
                    FetchState::IdleWithMore
                } else {
                    FetchState::IdleExhausted
                };
                self.last_error = None;
                tracing::debug!(items, has_more, pages = self.pages().len(), "Page appended");
                FetchOutcome::Appended { items, has_more }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Page fetch failed");
                self.state = if self.pages().is_empty() {
                    FetchState::Idle
                } else {
                    FetchState::IdleWithMore
                };
                let message = err.to_string();
                self.last_error = Some(message.clone());
                FetchOutcome::Failed { message }
            }
        }
    }
}
