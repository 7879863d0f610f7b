//! # newshub
//!
//! A terminal client for the NewsData.io news API. Shows headlines as text
//! cards, with free-text search and category / country filters.
//!
//! ## Usage
//!
//! ```sh
//! NEWSDATA_API_KEY=pub_xxx newshub                 # one page for the default query
//! newshub --query "" --category sports --country gb
//! newshub -i                                       # interactive session
//! ```
//!
//! ## Architecture
//!
//! 1. **Configuration**: resolved once from defaults, an optional YAML file, flags and env
//! 2. **Fetching**: one GET per request, search or browse depending on the query
//! 3. **Transform**: provider records are normalized into [`models::Article`]
//! 4. **Controller**: owns the filters and the list; stale responses are dropped
//! 5. **Output**: the page is rendered to stdout; logs go to stderr
//!
//! A failed fetch never shows an error page. The controller logs it and
//! shows placeholder articles instead (or nothing, with `--fail-empty`).

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod outputs;
pub mod transform;
pub mod utils;
