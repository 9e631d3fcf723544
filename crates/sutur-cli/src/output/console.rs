use sutur_core::model::ExtractionResult;
use sutur_core::report::{format_preview, format_summary};

pub fn print_summary(result: &ExtractionResult) {
    println!("{}", format_summary(result));
}

pub fn print_preview(result: &ExtractionResult, limit: usize) {
    if limit == 0 {
        return;
    }
    print!("{}", format_preview(result, limit));
}
