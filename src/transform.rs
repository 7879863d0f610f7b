//! Mapping from NewsData.io records to normalized [`Article`]s.
//!
//! The mapping is a field rename with two defaults: a missing description
//! falls back to the article content, and a missing source becomes
//! [`UNKNOWN_SOURCE`]. Nothing is validated here; URLs and dates are passed
//! through untouched and the renderer formats them defensively.

use crate::models::{Article, RawArticle, UNKNOWN_SOURCE};

/// Treat `Some("")` the same as `None`.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Normalize one provider record.
pub fn normalize(raw: RawArticle) -> Article {
    Article {
        title: raw.title.unwrap_or_default(),
        description: non_empty(raw.description).or_else(|| non_empty(raw.content)),
        url: raw.link.unwrap_or_default(),
        image_url: raw.image_url,
        published_at: raw.pub_date.unwrap_or_default(),
        source_name: non_empty(raw.source_id).unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
    }
}

/// Normalize a whole result set, keeping provider order.
pub fn normalize_all(results: Vec<RawArticle>) -> Vec<Article> {
    results.into_iter().map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawArticle {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_minimal_record() {
        let article = normalize(raw(
            r#"{"title":"A","link":"http://x","pubDate":"2024-01-01","source_id":"BBC"}"#,
        ));
        assert_eq!(
            article,
            Article {
                title: "A".to_string(),
                description: None,
                url: "http://x".to_string(),
                image_url: None,
                published_at: "2024-01-01".to_string(),
                source_name: "BBC".to_string(),
            }
        );
    }

    #[test]
    fn test_description_falls_back_to_content() {
        let article = normalize(raw(r#"{"title":"A","content":"Body text"}"#));
        assert_eq!(article.description.as_deref(), Some("Body text"));

        let article = normalize(raw(r#"{"title":"A","description":"","content":"Body"}"#));
        assert_eq!(article.description.as_deref(), Some("Body"));

        let article = normalize(raw(r#"{"title":"A","description":null,"content":null}"#));
        assert_eq!(article.description, None);
    }

    #[test]
    fn test_description_preferred_over_content() {
        let article = normalize(raw(r#"{"description":"Summary","content":"Body"}"#));
        assert_eq!(article.description.as_deref(), Some("Summary"));
    }

    #[test]
    fn test_missing_source_is_unknown() {
        assert_eq!(normalize(raw(r#"{"title":"A"}"#)).source_name, UNKNOWN_SOURCE);
        assert_eq!(
            normalize(raw(r#"{"title":"A","source_id":""}"#)).source_name,
            "Unknown Source"
        );
    }

    #[test]
    fn test_fields_pass_through_unchanged() {
        let article = normalize(raw(
            r#"{"title":"  Odd  Title ","link":"not a url","image_url":"img.png","pubDate":"yesterday-ish"}"#,
        ));
        assert_eq!(article.title, "  Odd  Title ");
        assert_eq!(article.url, "not a url");
        assert_eq!(article.image_url.as_deref(), Some("img.png"));
        assert_eq!(article.published_at, "yesterday-ish");
    }

    #[test]
    fn test_normalize_all_keeps_order() {
        let articles = normalize_all(vec![
            raw(r#"{"title":"first"}"#),
            raw(r#"{"title":"second"}"#),
        ]);
        let titles: Vec<_> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
        assert!(normalize_all(Vec::new()).is_empty());
    }
}
