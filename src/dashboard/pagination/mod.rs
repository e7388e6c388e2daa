//! Cursor pagination over the listing endpoint.
//!
//! `PageFetcher` owns the accumulated pages for the current query and
//! decides when a new page may be requested. It never performs I/O: the
//! runtime executes the `PageRequest` it hands out and reports back with
//! `complete`.

mod cache;
mod fetcher;
mod state;

pub use cache::PageCache;
pub use fetcher::{FetchOutcome, FetchTicket, PageFetcher, TicketedRequest};
pub use state::FetchState;
