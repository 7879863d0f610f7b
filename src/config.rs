//! Startup configuration.
//!
//! A single [`Config`] is resolved when the process starts and handed to the
//! fetcher explicitly. Values come from, in increasing priority:
//!
//! 1. built-in defaults (`top`, `us`, query `technology`, the public NewsData endpoint)
//! 2. an optional YAML file passed with `--config`
//! 3. CLI flags and their environment variables (`NEWSDATA_API_KEY`, ...)
//!
//! The API key is deliberately *not* checked here. A missing key only
//! surfaces when the first fetch asks for it through [`Config::api_key`].

use crate::cli::Cli;
use crate::error::{ConfigError, FetchError};
use crate::models::{Category, Country};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};
use url::Url;

/// Public NewsData.io endpoint for latest news.
pub const DEFAULT_BASE_URL: &str = "https://newsdata.io/api/1/news";

/// Placeholder shipped in example env files; treated as "no key".
pub const PLACEHOLDER_API_KEY: &str = "your_newsdata_api_key_here";

/// Query the first fetch runs with unless told otherwise.
pub const DEFAULT_QUERY: &str = "technology";

/// Keys accepted in the YAML config file. All optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub default_category: Option<Category>,
    pub default_country: Option<Country>,
    pub default_query: Option<String>,
    pub base_url: Option<String>,
}

impl FileConfig {
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        let file = serde_yaml::from_str(&text).map_err(|source| ConfigError::Yaml {
            path: display,
            source,
        })?;
        debug!("Loaded config file");
        Ok(file)
    }
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    api_key: Option<String>,
    pub default_category: Category,
    pub default_country: Country,
    pub default_query: String,
    pub base_url: Url,
}

impl Config {
    /// Build a config with defaults for everything but the key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            default_category: Category::default(),
            default_country: Country::default(),
            default_query: DEFAULT_QUERY.to_string(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }

    /// Point the fetcher at another endpoint (used for tests and self-hosted proxies).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Merge CLI/env values over an optional YAML file over defaults.
    #[instrument(level = "info", skip_all)]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(Path::new(path))?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    fn merge(cli: &Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let mut config = Config::new(cli.api_key.clone().or(file.api_key));
        if let Some(category) = cli.category.or(file.default_category) {
            config.default_category = category;
        }
        if let Some(country) = cli.country.or(file.default_country) {
            config.default_country = country;
        }
        if let Some(query) = cli.query.clone().or(file.default_query) {
            config.default_query = query;
        }
        if let Some(base_url) = cli.base_url.as_deref().or(file.base_url.as_deref()) {
            config.base_url = parse_base_url(base_url)?;
        }

        info!(
            category = %config.default_category,
            country = %config.default_country,
            query = %config.default_query,
            base_url = %config.base_url,
            api_key_set = config.api_key.is_some(),
            "Resolved configuration"
        );
        Ok(config)
    }

    /// The API key, or [`FetchError::Configuration`] if it is unset, blank
    /// or still the placeholder value.
    pub fn api_key(&self) -> Result<&str, FetchError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() && key != PLACEHOLDER_API_KEY => Ok(key),
            _ => Err(FetchError::Configuration),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}
