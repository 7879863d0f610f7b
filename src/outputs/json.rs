//! JSON snapshots of the article list.
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── 081502123.json
//!     └── 093011450.json
//! ```
//!
//! One file per save, named by local time of day with milliseconds.

use crate::models::{Article, Category, Country, FilterState};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// What gets written to disk: the list plus the filters that produced it.
#[derive(Debug, Deserialize, Serialize)]
pub struct Snapshot {
    pub saved_at: String,
    pub query: String,
    pub category: Category,
    pub country: Country,
    pub articles: Vec<Article>,
}

impl Snapshot {
    pub fn new(filters: &FilterState, articles: &[Article], now: DateTime<Local>) -> Self {
        Self {
            saved_at: now.to_rfc3339(),
            query: filters.query.clone(),
            category: filters.category,
            country: filters.country,
            articles: articles.to_vec(),
        }
    }
}

/// Write a [`Snapshot`] under `json_output_dir`, returning the file path.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_snapshot(
    filters: &FilterState,
    articles: &[Article],
    json_output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let now = Local::now();
    let snapshot = Snapshot::new(filters, articles, now);
    let json = serde_json::to_string_pretty(&snapshot)?;

    let day_dir = PathBuf::from(json_output_dir).join(now.format("%Y-%m-%d").to_string());
    if let Err(e) = fs::create_dir_all(&day_dir).await {
        error!(path = %day_dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let path = day_dir.join(format!("{}.json", now.format("%H%M%S%3f")));
    fs::write(&path, json).await?;
    info!(path = %path.display(), count = articles.len(), "Wrote JSON snapshot");
    Ok(path)
}
