//! Text rendering of a single article card.
//!
//! A card shows the truncated title and description, the publisher avatar
//! and name, the formatted publish date, and either the lead image link or
//! a placeholder. `hovered` and `image_failed` are the card's own state and
//! nothing outside the card reads them.

use crate::models::Article;
use crate::utils::truncate_text;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt::Write;
use url::Url;

pub const TITLE_MAX: usize = 80;
pub const DESCRIPTION_MAX: usize = 120;
pub const SOURCE_MAX: usize = 20;

const PLACEHOLDER_IMAGE: &str = "[ no image ]";

/// Format a provider timestamp for display, en-US style.
///
/// Understands RFC 3339, NewsData's `YYYY-MM-DD HH:MM:SS` and bare dates.
/// Anything else is shown as received.
pub fn format_published_at(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %-d, %Y, %I:%M %p").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%b %-d, %Y, %I:%M %p").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

/// What the image slot of a card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage<'a> {
    Url(&'a str),
    Placeholder,
}

/// One article plus its local interaction state.
///
/// A terminal never downloads the image, so nothing in the binary marks it
/// failed. The flag is kept so a front end that does load images can switch
/// the card to the placeholder once a load errors.
#[derive(Debug, Clone)]
pub struct CardView<'a> {
    article: &'a Article,
    hovered: bool,
    image_failed: bool,
}

impl<'a> CardView<'a> {
    pub fn new(article: &'a Article) -> Self {
        Self {
            article,
            hovered: false,
            image_failed: false,
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Record that the image could not be loaded; [`Self::image`] then
    /// returns [`CardImage::Placeholder`] for the rest of the card's life.
    pub fn mark_image_failed(&mut self) {
        self.image_failed = true;
    }

    pub fn title(&self) -> String {
        truncate_text(&self.article.title, TITLE_MAX)
    }

    pub fn description(&self) -> String {
        self.article
            .description
            .as_deref()
            .map(|d| truncate_text(d, DESCRIPTION_MAX))
            .unwrap_or_default()
    }

    pub fn source_label(&self) -> String {
        truncate_text(&self.article.source_name, SOURCE_MAX)
    }

    /// Single uppercase letter standing in for the publisher logo.
    pub fn avatar(&self) -> String {
        match self.article.source_name.chars().next() {
            Some(c) => c.to_uppercase().collect(),
            None => "?".to_string(),
        }
    }

    pub fn published(&self) -> String {
        format_published_at(&self.article.published_at)
    }

    /// The image to show, or the placeholder when there is none, it is not
    /// an http(s) URL, or it already failed to load.
    pub fn image(&self) -> CardImage<'a> {
        let Some(raw) = self.article.image_url.as_deref() else {
            return CardImage::Placeholder;
        };
        if self.image_failed {
            return CardImage::Placeholder;
        }
        match Url::parse(raw) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => CardImage::Url(raw),
            _ => CardImage::Placeholder,
        }
    }

    /// Where "clicking" the card leads.
    pub fn link(&self) -> &'a str {
        &self.article.url
    }

    /// Render the card as a block of text, numbered for `/open N`.
    pub fn render(&self, number: usize) -> String {
        let mut out = String::new();
        let marker = if self.hovered { '>' } else { ' ' };
        let badge = if self.hovered { "[READ MORE]" } else { "read more" };

        writeln!(out, "{marker}[{number}] {}", self.title()).unwrap();
        let description = self.description();
        if !description.is_empty() {
            writeln!(out, "     {description}").unwrap();
        }
        match self.image() {
            CardImage::Url(url) => writeln!(out, "     image: {url}").unwrap(),
            CardImage::Placeholder => writeln!(out, "     {PLACEHOLDER_IMAGE}").unwrap(),
        }
        writeln!(
            out,
            "     ({}) {} - {}  {badge}",
            self.avatar(),
            self.source_label(),
            self.published()
        )
        .unwrap();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article {
            title: "A".to_string(),
            description: None,
            url: "http://x".to_string(),
            image_url: None,
            published_at: "2024-01-01".to_string(),
            source_name: "bbc".to_string(),
        }
    }

    #[test]
    fn test_title_truncation() {
        let mut a = article();
        a.title = "x".repeat(85);
        assert_eq!(CardView::new(&a).title(), format!("{}...", "x".repeat(80)));

        a.title = "x".repeat(80);
        assert_eq!(CardView::new(&a).title(), "x".repeat(80));
    }

    #[test]
    fn test_description_truncation_and_absence() {
        let mut a = article();
        assert_eq!(CardView::new(&a).description(), "");

        a.description = Some("d".repeat(121));
        let shown = CardView::new(&a).description();
        assert_eq!(shown.chars().count(), 123);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_source_label_and_avatar() {
        let mut a = article();
        assert_eq!(CardView::new(&a).avatar(), "B");
        a.source_name = "the_extremely_long_source_name".to_string();
        assert_eq!(CardView::new(&a).source_label(), "the_extremely_long_s...");
    }

    #[test]
    fn test_format_published_at() {
        assert_eq!(format_published_at("2024-01-01"), "Jan 1, 2024");
        assert_eq!(
            format_published_at("2024-03-05 14:07:00"),
            "Mar 5, 2024, 02:07 PM"
        );
        assert_eq!(
            format_published_at("2024-12-25T09:30:00Z"),
            "Dec 25, 2024, 09:30 AM"
        );
        assert_eq!(format_published_at("last tuesday"), "last tuesday");
    }

    #[test]
    fn test_image_fallbacks() {
        let mut a = article();
        assert_eq!(CardView::new(&a).image(), CardImage::Placeholder);

        a.image_url = Some("https://img.example/a.jpg".to_string());
        let mut card = CardView::new(&a);
        assert_eq!(card.image(), CardImage::Url("https://img.example/a.jpg"));
        card.mark_image_failed();
        assert_eq!(card.image(), CardImage::Placeholder);

        a.image_url = Some("data-uri-or-junk".to_string());
        assert_eq!(CardView::new(&a).image(), CardImage::Placeholder);
    }

    #[test]
    fn test_render_marks_hovered_card() {
        let a = article();
        let mut card = CardView::new(&a);
        assert!(card.render(1).starts_with(" [1] A"));
        card.set_hovered(true);
        let text = card.render(1);
        assert!(text.starts_with(">[1] A"));
        assert!(text.contains("[READ MORE]"));
        assert!(text.contains("(B) bbc - Jan 1, 2024"));
        assert_eq!(card.link(), "http://x");
    }
}
