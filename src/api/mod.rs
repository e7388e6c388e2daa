//! Remote listing and match service: wire types, errors and the HTTP client.

mod client;
mod error;
mod traits;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use traits::{ListingSource, MatchService};
pub use types::{
    Cursor, Dog, DogFilter, MatchResponse, Page, PageRequest, ParseSortError, QueryKey,
    SortDirection, SortField, SortOrder,
};
