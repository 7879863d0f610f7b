//! Small string and file system helpers shared by the renderers and exports.

use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `max` characters, appending [`ELLIPSIS`] if
/// anything was cut. Counts characters, not bytes, so multi-byte text is
/// never split inside a code point.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_text("short", 10), "short");
/// assert_eq!(truncate_text("abcdef", 3), "abc...");
/// ```
pub fn truncate_text(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
    }
}

/// Capitalize the first character of a string.
///
/// Used for filter bar labels (e.g. "technology" -> "Technology").
pub fn upcase(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then writes and removes a probe file.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = format!("{}/.newshub_probe", path.trim_end_matches('/'));
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}
