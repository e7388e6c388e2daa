use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Remote listing/match service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the service (e.g., "https://frontend-take-home-service.fetch.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Max retry attempts for a failed page fetch (default: 3).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base backoff in milliseconds for retry (default: 100).
    #[serde(default = "default_retry_backoff_base_ms")]
    pub retry_backoff_base_ms: u64,
}

/// Initial listing parameters. Changing any of these restarts pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default)]
    pub breeds: Vec<String>,
    #[serde(default)]
    pub zip_codes: Vec<String>,
    #[serde(default)]
    pub age_min: Option<u32>,
    #[serde(default)]
    pub age_max: Option<u32>,
    /// Sort token in `field:direction` form (e.g., "breed:asc").
    #[serde(default = "default_sort")]
    pub sort: String,
    /// Items requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

/// Presentation settings handed to the rendering boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Delay between the sentinel becoming visible and the next-page request.
    #[serde(default = "default_scroll_debounce_ms")]
    pub scroll_debounce_ms: u64,
    /// Skeleton cards shown while a page is loading.
    #[serde(default = "default_placeholder_rows")]
    pub placeholder_rows: usize,
    /// Lifetime of a toast notification in seconds.
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,
    #[serde(default)]
    pub theme: ThemeName,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

fn default_base_url() -> String {
    "https://frontend-take-home-service.fetch.com".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_backoff_base_ms() -> u64 {
    100
}

fn default_sort() -> String {
    "breed:asc".to_string()
}

fn default_page_size() -> u32 {
    25
}

fn default_scroll_debounce_ms() -> u64 {
    200
}

fn default_placeholder_rows() -> usize {
    12
}

fn default_toast_seconds() -> u64 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            max_retries: default_max_retries(),
            retry_backoff_base_ms: default_retry_backoff_base_ms(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            breeds: Vec::new(),
            zip_codes: Vec::new(),
            age_min: None,
            age_max: None,
            sort: default_sort(),
            page_size: default_page_size(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scroll_debounce_ms: default_scroll_debounce_ms(),
            placeholder_rows: default_placeholder_rows(),
            toast_seconds: default_toast_seconds(),
            theme: ThemeName::default(),
        }
    }
}
