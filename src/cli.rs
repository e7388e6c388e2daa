//! Command-line arguments. Values given here override the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "pawmatch", version, about = "Browse adoptable dogs and find your match")]
pub struct Cli {
    /// Config file (default: <config dir>/pawmatch/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the listing service base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Only list these breeds (repeatable)
    #[arg(long = "breed", value_name = "BREED")]
    pub breeds: Vec<String>,

    /// Only list dogs in these zip codes (repeatable)
    #[arg(long = "zip", value_name = "ZIP")]
    pub zip_codes: Vec<String>,

    /// Minimum age in years
    #[arg(long)]
    pub age_min: Option<u32>,

    /// Maximum age in years
    #[arg(long)]
    pub age_max: Option<u32>,

    /// Sort order, <breed|name|age>:<asc|desc>
    #[arg(long, value_name = "FIELD:DIR")]
    pub sort: Option<String>,

    /// Dogs per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Log file (default: <data dir>/pawmatch/pawmatch.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file named by `--config` (or the default one).
    pub fn load_config(&self) -> Result<(Config, PathBuf), ConfigError> {
        match &self.config {
            Some(path) => Ok((Config::load_from(path)?, path.clone())),
            None => Ok((Config::load()?, Config::config_path())),
        }
    }

    /// Apply command-line overrides and re-validate.
    pub fn apply(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(url) = &self.base_url {
            config.api.base_url = url.clone();
        }
        if !self.breeds.is_empty() {
            config.query.breeds = self.breeds.clone();
        }
        if !self.zip_codes.is_empty() {
            config.query.zip_codes = self.zip_codes.clone();
        }
        if self.age_min.is_some() {
            config.query.age_min = self.age_min;
        }
        if self.age_max.is_some() {
            config.query.age_max = self.age_max;
        }
        if let Some(sort) = &self.sort {
            config.query.sort = sort.clone();
        }
        if let Some(size) = self.page_size {
            config.query.page_size = size;
        }
        config.validate()?;
        Ok(config)
    }
}
