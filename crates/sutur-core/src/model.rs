use serde::{Deserialize, Serialize};

use crate::extraction::PageContent;
use crate::lines::page_lines;

/// One non-blank line of text, tagged with the 1-based page it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    pub page: usize,
    pub text: String,
}

/// Everything extracted from a single document.
///
/// `total_lines` always equals `lines.len()`; build it with
/// [`ExtractionResult::from_pages`] rather than by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub total_pages: usize,
    pub total_lines: usize,
    pub lines: Vec<LineRecord>,
}

impl ExtractionResult {
    /// Split every page into trimmed, non-empty lines, keeping page order.
    ///
    /// Pages without any text still count toward `total_pages` but
    /// contribute no records.
    pub fn from_pages(pages: &[PageContent]) -> Self {
        let lines: Vec<LineRecord> = pages
            .iter()
            .flat_map(|p| page_lines(p.page_number, &p.text))
            .collect();

        ExtractionResult {
            total_pages: pages.len(),
            total_lines: lines.len(),
            lines,
        }
    }
}
