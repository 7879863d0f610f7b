//! NewsData.io client and the failure policy applied to its results.
//!
//! # Architecture
//!
//! - [`NewsSource`]: the seam the controller fetches through
//! - [`NewsDataClient`]: the real implementation; one GET per fetch
//! - [`FailurePolicy`]: turns a fetch `Result` into what the page shows
//! - [`fetch_or_fallback`]: convenience that always resolves to a list
//!
//! # Request shapes
//!
//! A non-blank query produces a *search* request:
//!
//! ```text
//! {base}?apikey={key}&q={form-encoded query}&language=en&size=10
//! ```
//!
//! Otherwise a *browse* request is sent:
//!
//! ```text
//! {base}?apikey={key}&country={country}&category={category}&language=en&size=10
//! ```
//!
//! There is no retry and no timeout beyond what `reqwest` does by default.

use crate::config::Config;
use crate::error::{FetchError, FetchErrorKind};
use crate::models::{Article, FilterState, NewsDataResponse, RequestMode};
use crate::transform::normalize_all;
use chrono::{SecondsFormat, Utc};
use std::time::Instant;
use url::Url;
use tracing::{debug, error, info, instrument, warn};

/// Language requested for every fetch.
pub const LANGUAGE: &str = "en";

/// Page size requested for every fetch.
pub const PAGE_SIZE: u32 = 10;

/// Anything that can turn a filter snapshot into articles.
///
/// Implementors should not log failures themselves; the caller's
/// [`FailurePolicy`] does that exactly once.
#[allow(async_fn_in_trait)]
pub trait NewsSource {
    async fn fetch(&self, filters: &FilterState) -> Result<Vec<Article>, FetchError>;
}

/// Build the request URL for a filter snapshot.
///
/// Parameters are appended to whatever query `base_url` already carries.
pub fn build_request_url(base_url: &Url, api_key: &str, filters: &FilterState) -> Url {
    let mut url = base_url.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("apikey", api_key);
        match filters.mode() {
            RequestMode::Search { query } => {
                pairs.append_pair("q", query);
            }
            RequestMode::Browse { category, country } => {
                pairs
                    .append_pair("country", country.code())
                    .append_pair("category", category.as_str());
            }
        }
        pairs
            .append_pair("language", LANGUAGE)
            .append_pair("size", &PAGE_SIZE.to_string());
    }
    url
}

/// HTTP client for the NewsData.io `/news` endpoint.
#[derive(Debug, Clone)]
pub struct NewsDataClient {
    http: reqwest::Client,
    config: Config,
}

impl NewsDataClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

impl NewsSource for NewsDataClient {
    #[instrument(level = "info", skip_all, fields(query = %filters.query, category = %filters.category, country = %filters.country))]
    async fn fetch(&self, filters: &FilterState) -> Result<Vec<Article>, FetchError> {
        let api_key = self.config.api_key()?;
        let url = build_request_url(&self.config.base_url, api_key, filters);
        debug!(mode = ?filters.mode(), "Sending request");

        let t0 = Instant::now();
        // reqwest errors carry the request URL, which includes the key.
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.without_url()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.without_url()))?;
        let parsed: NewsDataResponse = serde_json::from_str(&body)?;
        let articles = normalize_all(parsed.results.unwrap_or_default());
        info!(
            count = articles.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched articles"
        );
        Ok(articles)
    }
}

/// The fixed placeholder articles shown when a fetch fails.
///
/// Timestamps are taken at call time.
pub fn fallback_articles() -> Vec<Article> {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    vec![
        Article {
            title: "Breaking: Latest Technology News".to_string(),
            description: Some(
                "Stay updated with the latest developments in technology and innovation."
                    .to_string(),
            ),
            url: "#".to_string(),
            image_url: Some("https://via.placeholder.com/400x200?text=News+Image".to_string()),
            published_at: now.clone(),
            source_name: "Tech News".to_string(),
        },
        Article {
            title: "Science Discovery of the Year".to_string(),
            description: Some(
                "Scientists make groundbreaking discovery that could change everything."
                    .to_string(),
            ),
            url: "#".to_string(),
            image_url: Some("https://via.placeholder.com/400x200?text=Science+News".to_string()),
            published_at: now,
            source_name: "Science Daily".to_string(),
        },
    ]
}

/// What to show when a fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Show [`fallback_articles`].
    #[default]
    Fallback,
    /// Show nothing; the page falls through to its empty state.
    Empty,
}

/// A fetch outcome after the failure policy has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Settled {
    pub articles: Vec<Article>,
    pub error: Option<FetchErrorKind>,
}

impl FailurePolicy {
    /// Resolve a fetch result into the list to display, logging any error once.
    pub fn settle(self, result: Result<Vec<Article>, FetchError>) -> Settled {
        match result {
            Ok(articles) => Settled {
                articles,
                error: None,
            },
            Err(e) => {
                match &e {
                    FetchError::Configuration => {
                        error!(kind = %e.kind(), "Please set NEWSDATA_API_KEY (or api_key in the config file)")
                    }
                    _ => error!(kind = %e.kind(), error = %e, "Error fetching news"),
                }
                let articles = match self {
                    FailurePolicy::Fallback => fallback_articles(),
                    FailurePolicy::Empty => {
                        warn!("Fallback disabled; showing empty page");
                        Vec::new()
                    }
                };
                Settled {
                    articles,
                    error: Some(e.kind()),
                }
            }
        }
    }
}

/// Fetch and never fail: real articles on success, the fallback list otherwise.
pub async fn fetch_or_fallback<S: NewsSource>(source: &S, filters: &FilterState) -> Vec<Article> {
    FailurePolicy::Fallback
        .settle(source.fetch(filters).await)
        .articles
}
