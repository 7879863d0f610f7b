//! Rendering and export of the current page.
//!
//! # Submodules
//!
//! - [`card`]: one article as a text card, with its local hover / image state
//! - [`page`]: the whole page (filter bar, loading indicator, cards, empty state)
//! - [`json`]: JSON snapshots of the article list for later use

pub mod card;
pub mod json;
pub mod page;
