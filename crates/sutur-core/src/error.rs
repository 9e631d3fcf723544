use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SuturError {
    #[error("cannot access {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse PDF: {0}")]
    Parse(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SuturError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SuturError::File {
            path: path.into(),
            source,
        }
    }

    /// True for missing/unreadable inputs and unwritable outputs.
    pub fn is_file_error(&self) -> bool {
        matches!(self, SuturError::File { .. })
    }

    /// True when the input could not be interpreted as a PDF.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            SuturError::Parse(_) | SuturError::PdftotextFailed { .. }
        )
    }
}
