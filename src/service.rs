use crate::config::Config;
use crate::error::{BookstashError, Result};
use crate::models::BookmarkSummary;
use crate::parser::{parse_bookmarks, validate_format};
use crate::storage::MemoryStorage;
use crate::summary::summarize_bookmarks;
use log::debug;
use serde::Serialize;
use std::path::Path;

/// Result of ingesting one uploaded bookmark file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOutcome {
    /// Id of the stored file, usable with [`summarize_stored`]
    pub file_id: String,
    pub filename: String,
    pub summary: BookmarkSummary,
}

/// Validate, parse, summarize and store one uploaded bookmark file.
///
/// Checks run in order: filename extension and size cap (the upload-side
/// gates), then the format-marker gate, then the structural parse. The
/// file is stored only after it parsed successfully.
pub fn ingest_file(
    storage: &mut MemoryStorage,
    config: &Config,
    filename: &str,
    content: String,
) -> Result<UploadOutcome> {
    debug!("Ingesting upload '{}' ({} bytes)", filename, content.len());
    check_upload(config, filename, &content)?;
    validate_format(&content)?;

    let nodes = parse_bookmarks(&content)?;
    let summary = summarize_bookmarks(&nodes);
    debug!(
        "Upload '{}': {} bookmarks in {} folders",
        filename, summary.total_bookmarks, summary.total_folders
    );

    let stored = storage.add_file(filename, "text/html", content);
    Ok(UploadOutcome {
        file_id: stored.id,
        filename: stored.filename,
        summary,
    })
}

/// Read a bookmark export from disk and ingest it.
pub fn ingest_path(
    storage: &mut MemoryStorage,
    config: &Config,
    path: &Path,
) -> Result<UploadOutcome> {
    let content = std::fs::read_to_string(path)?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("bookmarks.html");
    ingest_file(storage, config, filename, content)
}

/// Re-derive the summary for an already stored file.
///
/// Summaries are never cached; each call parses the stored content again.
pub fn summarize_stored(storage: &MemoryStorage, id: &str) -> Result<BookmarkSummary> {
    let file = storage
        .get_file_by_id(id)
        .ok_or_else(|| BookstashError::FileNotFound(id.to_string()))?;

    let nodes = parse_bookmarks(&file.content)?;
    Ok(summarize_bookmarks(&nodes))
}

fn check_upload(config: &Config, filename: &str, content: &str) -> Result<()> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if !config.allowed_extensions.contains(&extension) {
        return Err(BookstashError::InvalidInput(format!(
            "only HTML files are allowed, got '{}'",
            filename
        )));
    }

    if content.len() > config.max_file_size {
        return Err(BookstashError::InvalidInput(format!(
            "file exceeds maximum size of {} bytes",
            config.max_file_size
        )));
    }

    Ok(())
}
