use crate::error::SuturError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

const DEFAULT_BINARY: &str = "pdftotext";

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Runs in reading-order mode (no `-layout`) so right-to-left runs come out
/// as logical lines rather than column-aligned fragments.
pub struct PdftotextExtractor {
    binary: PathBuf,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        Self::with_binary(DEFAULT_BINARY)
    }

    /// Use a specific pdftotext executable instead of the one on `PATH`.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        PdftotextExtractor {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, SuturError> {
        // Removed when dropped, whichever way this function returns.
        let tmpfile = scratch_file(&std::env::temp_dir(), pdf_bytes)?;

        log::debug!(
            "running {} on {} ({} bytes)",
            self.binary.display(),
            tmpfile.path().display(),
            pdf_bytes.len()
        );

        let output = Command::new(&self.binary)
            .arg("-enc")
            .arg("UTF-8")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SuturError::PdftotextNotFound
                } else {
                    SuturError::Parse(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if is_zero_page_rejection(code, &stderr) {
                log::debug!("pdftotext reported a document without pages");
                return Ok(Vec::new());
            }
            return Err(SuturError::PdftotextFailed { code, stderr });
        }

        let text = match String::from_utf8(output.stdout) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("pdftotext emitted invalid UTF-8, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        let pages = split_pages(&text);
        log::debug!("pdftotext reported {} page(s)", pages.len());
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Copy the document into a temp file in `dir` for pdftotext to read.
fn scratch_file(dir: &Path, pdf_bytes: &[u8]) -> Result<tempfile::NamedTempFile, SuturError> {
    let mut tmpfile =
        tempfile::NamedTempFile::new_in(dir).map_err(|e| SuturError::file(dir, e))?;
    tmpfile
        .write_all(pdf_bytes)
        .and_then(|()| tmpfile.flush())
        .map_err(|e| SuturError::file(tmpfile.path(), e))?;
    Ok(tmpfile)
}

/// pdftotext refuses a document with no pages: it clamps the last page to
/// the page count (0), finds it before the first page and exits with 99.
fn is_zero_page_rejection(code: i32, stderr: &str) -> bool {
    code == 99 && stderr.contains("Wrong page range") && stderr.contains("last page (0)")
}

/// Split pdftotext output into pages.
///
/// pdftotext ends every page, including empty ones, with a form feed
/// (`\x0c`), so the chunk after the last form feed is not a page unless it
/// carries text.
fn split_pages(text: &str) -> Vec<PageContent> {
    let mut chunks: Vec<&str> = text.split('\x0c').collect();
    if chunks.last().is_some_and(|c| c.trim().is_empty()) {
        chunks.pop();
    }

    chunks
        .into_iter()
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            text: page_text.to_string(),
        })
        .collect()
}
