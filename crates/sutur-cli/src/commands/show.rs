use std::path::PathBuf;

use sutur_core::error::SuturError;
use sutur_core::export;

use crate::output;

pub fn run(json_file: PathBuf, preview: usize) -> Result<(), SuturError> {
    let result = export::read_json(&json_file)?;

    output::console::print_summary(&result);
    println!();
    output::console::print_preview(&result, preview);

    Ok(())
}
