mod commands;
mod output;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use sutur_core::report::DEFAULT_PREVIEW_LINES;

#[derive(Parser)]
#[command(
    name = "sutur",
    version,
    about = "Extract page-tagged text lines from PDF documents into JSON"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every non-blank line of a PDF and write it as JSON
    Extract {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Output JSON file (default: <input stem>.json next to the input)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Number of lines shown in the console sample
        #[arg(short = 'n', long, default_value_t = DEFAULT_PREVIEW_LINES)]
        preview: usize,

        /// pdftotext executable to use
        #[arg(long, env = "SUTUR_PDFTOTEXT", value_name = "PATH")]
        pdftotext: Option<PathBuf>,

        /// Print nothing on success
        #[arg(short, long)]
        quiet: bool,
    },
    /// Show page and line counts of a PDF without writing anything
    Info {
        /// Path to the PDF file
        input_file: PathBuf,

        /// pdftotext executable to use
        #[arg(long, env = "SUTUR_PDFTOTEXT", value_name = "PATH")]
        pdftotext: Option<PathBuf>,
    },
    /// Print the summary and sample of a previously written JSON file
    Show {
        /// Path to a JSON file produced by `sutur extract`
        json_file: PathBuf,

        /// Number of lines shown in the console sample
        #[arg(short = 'n', long, default_value_t = DEFAULT_PREVIEW_LINES)]
        preview: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Extract {
            input_file,
            out,
            preview,
            pdftotext,
            quiet,
        } => commands::extract::run(input_file, out, preview, pdftotext, quiet),
        Commands::Info {
            input_file,
            pdftotext,
        } => commands::info::run(input_file, pdftotext),
        Commands::Show { json_file, preview } => commands::show::run(json_file, preview),
    };

    if let Err(e) = result {
        log::debug!("{e:?}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
