//! Parsing of interactive-mode input lines into UI events.

use crate::models::{Category, Country};

/// One user action in interactive mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Change the query text only.
    Query(String),
    /// Submit a search, optionally replacing the query first.
    Search(Option<String>),
    Category(Category),
    Country(Country),
    /// Highlight card `n` (1-based).
    Select(usize),
    /// Show the link of card `n` (1-based).
    Open(usize),
    Refresh,
    Save,
    Help,
    Quit,
    /// Blank line.
    Nothing,
}

fn card_number(arg: &str) -> Result<usize, String> {
    match arg.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a card number, got {arg:?}")),
    }
}

/// Parse one input line. A line that does not start with `/` is a search.
pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Nothing);
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Command::Search(Some(line.to_string())));
    };

    let (name, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let arg = arg.trim();
    match name {
        "query" | "q" => Ok(Command::Query(arg.to_string())),
        "search" | "s" if arg.is_empty() => Ok(Command::Search(None)),
        "search" | "s" => Ok(Command::Search(Some(arg.to_string()))),
        "category" | "c" => Category::parse(arg)
            .map(Command::Category)
            .ok_or_else(|| format!("unknown category {arg:?}")),
        "country" | "n" => Country::parse(arg)
            .map(Command::Country)
            .ok_or_else(|| format!("unknown country {arg:?}")),
        "select" => card_number(arg).map(Command::Select),
        "open" | "o" => card_number(arg).map(Command::Open),
        "refresh" | "r" => Ok(Command::Refresh),
        "save" => Ok(Command::Save),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command /{other} (try /help)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_line_is_search() {
        assert_eq!(
            parse("  climate change "),
            Ok(Command::Search(Some("climate change".to_string())))
        );
        assert_eq!(parse(""), Ok(Command::Nothing));
    }

    #[test]
    fn test_query_without_text_clears_it() {
        assert_eq!(parse("/query"), Ok(Command::Query(String::new())));
        assert_eq!(parse("/query  ai chips"), Ok(Command::Query("ai chips".to_string())));
    }

    #[test]
    fn test_search_with_and_without_text() {
        assert_eq!(parse("/search"), Ok(Command::Search(None)));
        assert_eq!(parse("/s rust"), Ok(Command::Search(Some("rust".to_string()))));
    }

    #[test]
    fn test_filters() {
        assert_eq!(parse("/category Sports"), Ok(Command::Category(Category::Sports)));
        assert_eq!(parse("/country de"), Ok(Command::Country(Country::De)));
        assert!(parse("/category weather").is_err());
        assert!(parse("/country xx").is_err());
    }

    #[test]
    fn test_card_numbers() {
        assert_eq!(parse("/open 2"), Ok(Command::Open(2)));
        assert_eq!(parse("/select 1"), Ok(Command::Select(1)));
        assert!(parse("/open 0").is_err());
        assert!(parse("/open two").is_err());
    }

    #[test]
    fn test_misc() {
        assert_eq!(parse("/quit"), Ok(Command::Quit));
        assert_eq!(parse("/refresh"), Ok(Command::Refresh));
        assert_eq!(parse("/save"), Ok(Command::Save));
        assert_eq!(parse("/?"), Ok(Command::Help));
        assert!(parse("/frobnicate").is_err());
    }
}
