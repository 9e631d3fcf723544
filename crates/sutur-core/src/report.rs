use std::fmt::Write;

use crate::model::ExtractionResult;

/// Number of records shown in the preview unless asked otherwise.
pub const DEFAULT_PREVIEW_LINES: usize = 10;

/// Maximum characters of each record shown in the preview.
pub const PREVIEW_WIDTH: usize = 80;

pub fn format_summary(result: &ExtractionResult) -> String {
    format!(
        "Extracted {} lines from {} pages",
        result.total_lines, result.total_pages
    )
}

/// Labeled block with the first `limit` records, one per line.
pub fn format_preview(result: &ExtractionResult, limit: usize) -> String {
    let mut out = format!("--- Sample (first {limit} lines) ---\n");
    for line in result.lines.iter().take(limit) {
        let _ = writeln!(out, "Page {}: {}...", line.page, truncate(&line.text));
    }
    out
}

/// First [`PREVIEW_WIDTH`] characters, never splitting a code point.
fn truncate(text: &str) -> &str {
    match text.char_indices().nth(PREVIEW_WIDTH) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
