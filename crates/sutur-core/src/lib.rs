pub mod error;
pub mod export;
pub mod extraction;
pub mod lines;
pub mod model;
pub mod report;

use std::path::Path;

use error::SuturError;
use extraction::{has_pdf_signature, PdfExtractor};
use model::ExtractionResult;

/// Main API entry point: extract the page-tagged text lines of a PDF file.
///
/// Fails with [`SuturError::File`] when `path` cannot be read and with a
/// parse error when the bytes are not a PDF the backend understands. No
/// partial result is returned.
pub fn extract_pdf(
    path: &Path,
    extractor: &dyn PdfExtractor,
) -> Result<ExtractionResult, SuturError> {
    let pdf_bytes = std::fs::read(path).map_err(|e| SuturError::file(path, e))?;
    log::info!(
        "extracting {} with {}",
        path.display(),
        extractor.backend_name()
    );
    extract_pdf_bytes(&pdf_bytes, extractor)
}

/// Same as [`extract_pdf`] for a document already in memory.
pub fn extract_pdf_bytes(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<ExtractionResult, SuturError> {
    if !has_pdf_signature(pdf_bytes) {
        return Err(SuturError::Parse("missing %PDF- header".into()));
    }

    let pages = extractor.extract_pages(pdf_bytes)?;
    let result = ExtractionResult::from_pages(&pages);

    log::info!(
        "{} line(s) across {} page(s)",
        result.total_lines,
        result.total_pages
    );
    Ok(result)
}
