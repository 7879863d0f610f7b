//! Data models for provider responses, normalized articles and filter state.
//!
//! This module defines the core data structures used throughout the application:
//! - [`NewsDataResponse`] / [`RawArticle`]: the NewsData.io response body as received
//! - [`Article`]: the provider-agnostic record the renderer consumes
//! - [`Category`] / [`Country`]: the fixed filter enumerations offered by the filter bar
//! - [`FilterState`] / [`RequestMode`]: what the user asked for, and how it maps to a request
//!
//! Provider field names (`pubDate`, `image_url`, `source_id`) are kept on the raw
//! types only; everything downstream of the transformer uses [`Article`].

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source name used when the provider omits `source_id`.
pub const UNKNOWN_SOURCE: &str = "Unknown Source";

/// Body of a NewsData.io `/news` response.
///
/// Only `results` is read; status and paging fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct NewsDataResponse {
    /// Articles returned for the request. Missing or `null` means no results.
    #[serde(default)]
    pub results: Option<Vec<RawArticle>>,
}

/// One article exactly as NewsData.io describes it.
///
/// Every field is optional because the provider routinely sends `null`
/// for anything it could not extract.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, rename = "pubDate")]
    pub pub_date: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
}

/// A normalized news article ready for rendering.
///
/// Created fresh for every applied fetch. The controller replaces its whole
/// list at once, so the position in that list is the only identity an
/// article has.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Headline, passed through from the provider (may be empty).
    pub title: String,
    /// Short summary; falls back to the article content, may be absent.
    pub description: Option<String>,
    /// Link to the full story.
    pub url: String,
    /// Lead image, if the provider has one.
    pub image_url: Option<String>,
    /// Publication timestamp in the provider's own format.
    pub published_at: String,
    /// Publisher identifier. Never empty.
    pub source_name: String,
}

/// News categories offered by the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Entertainment,
    Environment,
    Food,
    Health,
    Politics,
    Science,
    Sports,
    Technology,
    #[default]
    Top,
    World,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Business,
        Category::Entertainment,
        Category::Environment,
        Category::Food,
        Category::Health,
        Category::Politics,
        Category::Science,
        Category::Sports,
        Category::Technology,
        Category::Top,
        Category::World,
    ];

    /// The value sent to the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Environment => "environment",
            Category::Food => "food",
            Category::Health => "health",
            Category::Politics => "politics",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
            Category::Top => "top",
            Category::World => "world",
        }
    }

    /// Parse an API value, case-insensitively.
    pub fn parse(s: &str) -> Option<Category> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Countries offered by the filter bar, as ISO 3166-1 alpha-2 codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    #[default]
    Us,
    Gb,
    Ca,
    Au,
    In,
    De,
    Fr,
    Jp,
    Br,
    Mx,
}

impl Country {
    pub const ALL: [Country; 10] = [
        Country::Us,
        Country::Gb,
        Country::Ca,
        Country::Au,
        Country::In,
        Country::De,
        Country::Fr,
        Country::Jp,
        Country::Br,
        Country::Mx,
    ];

    /// The two-letter code sent to the API.
    pub fn code(&self) -> &'static str {
        match self {
            Country::Us => "us",
            Country::Gb => "gb",
            Country::Ca => "ca",
            Country::Au => "au",
            Country::In => "in",
            Country::De => "de",
            Country::Fr => "fr",
            Country::Jp => "jp",
            Country::Br => "br",
            Country::Mx => "mx",
        }
    }

    /// Human-readable name shown in the filter bar.
    pub fn name(&self) -> &'static str {
        match self {
            Country::Us => "United States",
            Country::Gb => "United Kingdom",
            Country::Ca => "Canada",
            Country::Au => "Australia",
            Country::In => "India",
            Country::De => "Germany",
            Country::Fr => "France",
            Country::Jp => "Japan",
            Country::Br => "Brazil",
            Country::Mx => "Mexico",
        }
    }

    /// Parse a country code, case-insensitively.
    pub fn parse(s: &str) -> Option<Country> {
        let s = s.trim();
        Country::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What the user is currently asking for.
///
/// A non-blank `query` always wins over `category` / `country`; the
/// latter are still kept so clearing the query returns to browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub category: Category,
    pub country: Country,
}

impl FilterState {
    pub fn new(query: impl Into<String>, category: Category, country: Country) -> Self {
        Self {
            query: query.into(),
            category,
            country,
        }
    }

    /// Decide which request shape these filters produce.
    pub fn mode(&self) -> RequestMode<'_> {
        if self.query.trim().is_empty() {
            RequestMode::Browse {
                category: self.category,
                country: self.country,
            }
        } else {
            RequestMode::Search { query: &self.query }
        }
    }
}

/// The two request shapes the fetcher knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode<'a> {
    /// Free-text search; category and country are not sent.
    Search { query: &'a str },
    /// Headlines for one country and category.
    Browse { category: Category, country: Country },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_selects_browse_mode() {
        let filters = FilterState::new("   \t", Category::Sports, Country::Gb);
        assert_eq!(
            filters.mode(),
            RequestMode::Browse {
                category: Category::Sports,
                country: Country::Gb
            }
        );
    }

    #[test]
    fn test_query_overrides_category_and_country() {
        let filters = FilterState::new(" rust ", Category::Sports, Country::Gb);
        assert_eq!(filters.mode(), RequestMode::Search { query: " rust " });
    }

    #[test]
    fn test_enumerations_are_complete() {
        assert_eq!(Category::ALL.len(), 11);
        assert_eq!(Country::ALL.len(), 10);
        assert_eq!(Category::default(), Category::Top);
        assert_eq!(Country::default(), Country::Us);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Category::parse("Technology"), Some(Category::Technology));
        assert_eq!(Country::parse(" IN "), Some(Country::In));
        assert_eq!(Category::parse("weather"), None);
        assert_eq!(Country::parse("zz"), None);
    }

    #[test]
    fn test_category_serde_uses_api_values() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"entertainment\"");
        let country: Country = serde_json::from_str("\"jp\"").unwrap();
        assert_eq!(country, Country::Jp);
    }

    #[test]
    fn test_response_tolerates_nulls_and_missing_results() {
        let json = r#"{"status": "success", "results": [{"title": null, "link": "http://x"}]}"#;
        let resp: NewsDataResponse = serde_json::from_str(json).unwrap();
        let results = resp.results.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, None);
        assert_eq!(results[0].link.as_deref(), Some("http://x"));

        let empty: NewsDataResponse = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert!(empty.results.is_none());
    }

    #[test]
    fn test_article_serializes_camel_case() {
        let article = Article {
            title: "A".to_string(),
            description: None,
            url: "http://x".to_string(),
            image_url: None,
            published_at: "2024-01-01".to_string(),
            source_name: "BBC".to_string(),
        };
        let json = serde_json::to_string(&article).unwrap();
        assert!(json.contains("\"publishedAt\":\"2024-01-01\""));
        assert!(json.contains("\"sourceName\":\"BBC\""));
        assert!(json.contains("\"imageUrl\":null"));
    }
}
