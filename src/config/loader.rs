use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::api::{DogFilter, QueryKey, SortOrder};
use crate::config::types::Config;

/// Largest page the listing endpoint accepts.
const MAX_PAGE_SIZE: u32 = 100;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/pawmatch/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pawmatch").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads, parses and validates the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is an http(s) URL
    /// - The page size is within the endpoint's limits
    /// - The sort token parses
    /// - The age range is not inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.api.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("Base URL '{}' must start with http:// or https://", base_url),
            });
        }

        let size = self.query.page_size;
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(ConfigError::ValidationError {
                message: format!("Page size {} must be between 1 and {}", size, MAX_PAGE_SIZE),
            });
        }

        if let Err(err) = self.query.sort.parse::<SortOrder>() {
            return Err(ConfigError::ValidationError {
                message: err.to_string(),
            });
        }

        if let (Some(min), Some(max)) = (self.query.age_min, self.query.age_max) {
            if min > max {
                return Err(ConfigError::ValidationError {
                    message: format!("Minimum age {} exceeds maximum age {}", min, max),
                });
            }
        }

        Ok(())
    }

    /// Builds the pagination cache key from the configured query.
    pub fn query_key(&self) -> Result<QueryKey, ConfigError> {
        let sort = self
            .query
            .sort
            .parse::<SortOrder>()
            .map_err(|err| ConfigError::ValidationError {
                message: err.to_string(),
            })?;

        Ok(QueryKey {
            filter: DogFilter {
                breeds: self.query.breeds.clone(),
                zip_codes: self.query.zip_codes.clone(),
                age_min: self.query.age_min,
                age_max: self.query.age_max,
            },
            sort,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{SortDirection, SortField};

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = Config::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn rejects_inverted_age_range() {
        let mut config = Config::default();
        config.query.age_min = Some(9);
        config.query.age_max = Some(2);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds maximum age"));
    }

    #[test]
    fn query_key_parses_sort_token() {
        let mut config = Config::default();
        config.query.sort = "age:desc".to_string();
        config.query.breeds = vec!["Beagle".to_string()];
        let key = config.query_key().unwrap();
        assert_eq!(key.sort.field, SortField::Age);
        assert_eq!(key.sort.direction, SortDirection::Desc);
        assert_eq!(key.filter.breeds, vec!["Beagle".to_string()]);
    }
}
