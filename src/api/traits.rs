//! Collaborator seams for the dashboard runtime.

use async_trait::async_trait;

use super::error::ApiError;
use super::types::{MatchResponse, Page, PageRequest};

/// Source of listing pages.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the page described by `request`.
    ///
    /// Implementations own any retry policy; the caller treats an `Err`
    /// as final for this attempt.
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page, ApiError>;
}

/// Service that picks the best dog for a set of favourites.
#[async_trait]
pub trait MatchService: Send + Sync {
    /// Submit the favourite ids, in selection order.
    ///
    /// An empty slice is a valid (degenerate) request.
    async fn find_match(&self, ids: &[String]) -> Result<MatchResponse, ApiError>;
}
