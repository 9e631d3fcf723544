pub mod extract;
pub mod info;
pub mod show;

use std::path::PathBuf;

use sutur_core::extraction::pdftotext::PdftotextExtractor;

fn extractor(pdftotext: Option<PathBuf>) -> PdftotextExtractor {
    match pdftotext {
        Some(binary) => PdftotextExtractor::with_binary(binary),
        None => PdftotextExtractor::new(),
    }
}
