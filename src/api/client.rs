//! HTTP client for the dog listing and match endpoints.

use std::future::Future;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tokio::time::timeout;

use crate::config::ApiConfig;

use super::error::ApiError;
use super::traits::{ListingSource, MatchService};
use super::types::{MatchResponse, Page, PageRequest};

const SEARCH_PATH: &str = "/dogs/search";
const MATCH_PATH: &str = "/dogs/match";

/// Client for the listing service.
///
/// Page fetches are retried on transient failures; match submissions
/// are sent exactly once.
pub struct ApiClient {
    client: Client,
    base_url: String,
    request_timeout: Duration,
    max_retries: u32,
    retry_backoff_base: Duration,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(|source| ApiError::Transport { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
            max_retries: config.max_retries,
            retry_backoff_base: Duration::from_millis(config.retry_backoff_base_ms),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn search_once(&self, request: &PageRequest) -> Result<Page, ApiError> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        let pairs = request.query_pairs();

        tracing::debug!(
            url = %url,
            cursor = ?request.cursor,
            sort = %request.key.sort,
            "Fetching listing page"
        );

        self.with_timeout(async {
            let response = self.client.get(&url).query(&pairs).send().await?;
            decode(response).await
        })
        .await
    }

    async fn with_timeout<T, F>(&self, fut: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        match timeout(self.request_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    fn backoff(&self, attempt: u32) -> Duration {
        self.retry_backoff_base
            .saturating_mul(2u32.saturating_pow(attempt))
    }
}

#[async_trait]
impl ListingSource for ApiClient {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page, ApiError> {
        let mut attempt = 0;
        loop {
            match self.search_once(request).await {
                Ok(page) => return Ok(page),
                Err(err) if err.is_retryable() && attempt < self.max_retries => {
                    let delay = self.backoff(attempt);
                    tracing::warn!(
                        attempt = attempt + 1,
                        max_retries = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "Listing fetch failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[async_trait]
impl MatchService for ApiClient {
    async fn find_match(&self, ids: &[String]) -> Result<MatchResponse, ApiError> {
        let url = format!("{}{}", self.base_url, MATCH_PATH);
        tracing::debug!(url = %url, favourites = ids.len(), "Submitting match request");

        let start = Instant::now();
        let result: Result<MatchResponse, ApiError> = self
            .with_timeout(async {
                let response = self.client.post(&url).json(ids).send().await?;
                decode(response).await
            })
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(resp) => tracing::info!(latency_ms, match_id = %resp.match_id, "Match resolved"),
            Err(err) => tracing::warn!(latency_ms, error = %err, "Match request failed"),
        }
        result
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ApiError::Decode(format!("Failed to parse response JSON: {}", e)))
}
