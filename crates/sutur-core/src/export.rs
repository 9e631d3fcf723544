use std::path::Path;

use crate::error::SuturError;
use crate::model::ExtractionResult;

/// Render the result as indented JSON, non-ASCII text left as-is.
pub fn to_json_string(result: &ExtractionResult) -> Result<String, SuturError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Write the result to `output` as UTF-8 JSON, replacing any existing file.
pub fn write_json(result: &ExtractionResult, output: &Path) -> Result<(), SuturError> {
    let json = to_json_string(result)?;
    std::fs::write(output, &json).map_err(|e| SuturError::file(output, e))?;

    log::debug!(
        "wrote {} line(s) ({} bytes) to {}",
        result.total_lines,
        json.len(),
        output.display()
    );
    Ok(())
}

/// Load a file previously produced by [`write_json`].
pub fn read_json(path: &Path) -> Result<ExtractionResult, SuturError> {
    let bytes = std::fs::read(path).map_err(|e| SuturError::file(path, e))?;
    let result: ExtractionResult = serde_json::from_slice(&bytes)
        .map_err(|e| SuturError::Parse(format!("{}: {}", path.display(), e)))?;

    if result.total_lines != result.lines.len() {
        return Err(SuturError::Parse(format!(
            "{}: total_lines is {} but {} line(s) are listed",
            path.display(),
            result.total_lines,
            result.lines.len()
        )));
    }

    Ok(result)
}
