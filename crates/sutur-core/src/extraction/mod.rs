pub mod pdftotext;

use crate::error::SuturError;

/// Raw text of a single page of a PDF, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page,
    /// including pages that carry no text.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, SuturError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// How far into the file the `%PDF-` marker may appear.
const SIGNATURE_WINDOW: usize = 1024;

/// Whether `bytes` carries a PDF file signature near the start.
pub fn has_pdf_signature(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(SIGNATURE_WINDOW)];
    head.windows(5).any(|w| w == b"%PDF-")
}
