use std::collections::BTreeSet;
use std::path::PathBuf;

use sutur_core::error::SuturError;
use sutur_core::extraction::PdfExtractor;

pub fn run(pdf_file: PathBuf, pdftotext: Option<PathBuf>) -> Result<(), SuturError> {
    let extractor = super::extractor(pdftotext);
    let result = sutur_core::extract_pdf(&pdf_file, &extractor)?;

    let pages_with_text: BTreeSet<usize> = result.lines.iter().map(|l| l.page).collect();

    println!("PDF Information");
    println!("===============");
    println!("File: {}", pdf_file.display());
    println!(
        "Backend: {} ({})",
        extractor.backend_name(),
        extractor.binary().display()
    );
    println!("Pages: {}", result.total_pages);
    println!(
        "Pages without text: {}",
        result.total_pages - pages_with_text.len()
    );
    println!("Lines: {}", result.total_lines);

    Ok(())
}
