use std::path::{Path, PathBuf};

use sutur_core::error::SuturError;
use sutur_core::export;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_file: Option<PathBuf>,
    preview: usize,
    pdftotext: Option<PathBuf>,
    quiet: bool,
) -> Result<(), SuturError> {
    let output_file = output_file.unwrap_or_else(|| default_output(&pdf_file));
    let extractor = super::extractor(pdftotext);

    if !quiet {
        println!("Extracting text from: {}", pdf_file.display());
    }

    let result = sutur_core::extract_pdf(&pdf_file, &extractor)?;

    if !quiet {
        output::console::print_summary(&result);
    }

    export::write_json(&result, &output_file)?;

    if !quiet {
        println!("Saved to: {}", output_file.display());
        println!();
        output::console::print_preview(&result, preview);
    }

    Ok(())
}

/// `<stem>.json` in the same directory as the input.
fn default_output(pdf_file: &Path) -> PathBuf {
    pdf_file.with_extension("json")
}
