//! Command-line interface definitions for newshub.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The filter defaults and the API key can also come from environment
//! variables or a YAML file; see [`crate::config`] for the precedence rules.

use crate::models::{Category, Country};
use clap::Parser;

/// Command-line arguments for newshub.
///
/// # Examples
///
/// ```sh
/// # Headlines for the default query
/// NEWSDATA_API_KEY=pub_xxx newshub
///
/// # Browse UK sports (an empty query switches to category/country browsing)
/// newshub --query "" --category sports --country gb
///
/// # Interactive session, saving each page under ./snapshots
/// newshub -i -j ./snapshots
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// NewsData.io API key
    #[arg(long, env = "NEWSDATA_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Initial category filter
    #[arg(long, value_enum, env = "NEWSHUB_DEFAULT_CATEGORY")]
    pub category: Option<Category>,

    /// Initial country filter
    #[arg(long, value_enum, env = "NEWSHUB_DEFAULT_COUNTRY")]
    pub country: Option<Country>,

    /// Initial search query; pass an empty string to browse by category and country
    #[arg(short, long, env = "NEWSHUB_DEFAULT_QUERY")]
    pub query: Option<String>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the NewsData.io endpoint
    #[arg(long, env = "NEWSHUB_BASE_URL")]
    pub base_url: Option<String>,

    /// Keep running and read commands from stdin
    #[arg(short, long)]
    pub interactive: bool,

    /// Directory to write JSON snapshots of the article list into
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Show an empty page instead of placeholder articles when a fetch fails
    #[arg(long)]
    pub fail_empty: bool,
}
