//! Whole-page rendering: header, filter bar, loading indicator, the card
//! list and the empty state.

use crate::error::FetchErrorKind;
use crate::models::{Article, Category, Country, FilterState};
use crate::outputs::card::CardView;
use crate::utils::upcase;
use itertools::Itertools;
use std::fmt::Write;

pub const LOADING_MESSAGE: &str = "Loading latest news...";
pub const EMPTY_TITLE: &str = "No articles found";
pub const EMPTY_HINT: &str =
    "Try adjusting your search terms or selecting a different category and country.";

/// Everything the page needs, borrowed from the controller.
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub filters: &'a FilterState,
    pub loading: bool,
    pub articles: &'a [Article],
    /// Zero-based index of the hovered card, if any.
    pub selected: Option<usize>,
    /// Shown as a diagnostic line when present.
    pub last_error: Option<FetchErrorKind>,
}

fn filter_bar(filters: &FilterState) -> String {
    let query = if filters.query.is_empty() {
        "<none>".to_string()
    } else {
        format!("\"{}\"", filters.query)
    };
    format!(
        "Search: {query} | Category: {} | Country: {}",
        upcase(filters.category.as_str()),
        filters.country.name()
    )
}

/// Render the page as plain text.
pub fn render(view: &PageView<'_>) -> String {
    let mut out = String::new();
    writeln!(out, "NewsHub - Stay informed with the latest news from around the world").unwrap();
    writeln!(out, "{}", filter_bar(view.filters)).unwrap();
    writeln!(out).unwrap();

    if view.loading {
        writeln!(out, "{LOADING_MESSAGE}").unwrap();
    }

    for (i, article) in view.articles.iter().enumerate() {
        let mut card = CardView::new(article);
        card.set_hovered(view.selected == Some(i));
        writeln!(out, "{}", card.render(i + 1)).unwrap();
    }

    if view.articles.is_empty() && !view.loading {
        writeln!(out, "{EMPTY_TITLE}").unwrap();
        writeln!(out, "{EMPTY_HINT}").unwrap();
    }

    if let Some(kind) = view.last_error {
        writeln!(out, "(diagnostic: last fetch failed: {kind})").unwrap();
    }
    out
}

/// Help text listing the interactive commands and accepted filter values.
pub fn help() -> String {
    let categories = Category::ALL.iter().map(|c| c.as_str()).join(", ");
    let countries = Country::ALL
        .iter()
        .map(|c| format!("{} ({})", c.code(), c.name()))
        .join(", ");
    format!(
        "Commands:\n  \
         /query <text>      type a query without searching\n  \
         /search [text]     search (optionally setting the query first)\n  \
         /category <name>   {categories}\n  \
         /country <code>    {countries}\n  \
         /select <n>        highlight card n\n  \
         /open <n>          show the link for card n\n  \
         /refresh           fetch again with the current filters\n  \
         /save              write the current list to the JSON output directory\n  \
         /help              show this text\n  \
         /quit              exit\n\
         Any other line is searched for directly.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            description: Some("desc".to_string()),
            url: "http://x".to_string(),
            image_url: None,
            published_at: "2024-01-01".to_string(),
            source_name: "Wire".to_string(),
        }
    }

    #[test]
    fn test_empty_state_when_idle() {
        let filters = FilterState::new("", Category::World, Country::Gb);
        let page = render(&PageView {
            filters: &filters,
            loading: false,
            articles: &[],
            selected: None,
            last_error: None,
        });
        assert!(page.contains("Search: <none> | Category: World | Country: United Kingdom"));
        assert!(page.contains(EMPTY_TITLE));
        assert!(!page.contains(LOADING_MESSAGE));
    }

    #[test]
    fn test_loading_hides_empty_state() {
        let filters = FilterState::new("x", Category::Top, Country::Us);
        let page = render(&PageView {
            filters: &filters,
            loading: true,
            articles: &[],
            selected: None,
            last_error: None,
        });
        assert!(page.contains(LOADING_MESSAGE));
        assert!(!page.contains(EMPTY_TITLE));
    }

    #[test]
    fn test_cards_are_numbered_and_selected() {
        let filters = FilterState::new("rust", Category::Top, Country::Us);
        let articles = vec![article("first"), article("second")];
        let page = render(&PageView {
            filters: &filters,
            loading: false,
            articles: &articles,
            selected: Some(1),
            last_error: Some(FetchErrorKind::Http),
        });
        assert!(page.contains(" [1] first"));
        assert!(page.contains(">[2] second"));
        assert!(page.contains("Search: \"rust\""));
        assert!(page.contains("last fetch failed: http"));
        assert!(!page.contains(EMPTY_TITLE));
    }

    #[test]
    fn test_help_lists_all_filter_values() {
        let text = help();
        for c in Category::ALL {
            assert!(text.contains(c.as_str()));
        }
        assert!(text.contains("mx (Mexico)"));
    }
}
