// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// imgdir2pdf — convert a directory of images into a single PDF.
//
// Entry point. Initialises logging, parses the command line, runs the
// conversion, and maps any error to a diagnostic and an exit status.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use imgdir2pdf_core::human_errors::{Severity, humanize_error};
use imgdir2pdf_core::Imgdir2PdfError;
use imgdir2pdf_document::convert_directory;

const USAGE: &str = "\nusage: imgdir2pdf DIR\n\
Convert all images in given directory to single pdf.\n\
Order is defined by sorting their names.\n\
\nSupported files: png, jpg, jpeg, gif (first frame only)\n\
Resulting PDF matches DIR's base name and is saved in DIR.\n";

#[derive(Debug, Parser)]
#[command(
    name = "imgdir2pdf",
    version,
    about = "Convert all images in a directory to a single PDF",
    long_about = USAGE
)]
struct Cli {
    /// Directory holding the images; the PDF is written into it
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(dir) = cli.dir else {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    };

    ExitCode::from(run(&dir))
}

/// Convert `dir` and return the process exit status.
fn run(dir: &Path) -> u8 {
    tracing::info!(dir = %dir.display(), "imgdir2pdf starting");

    match convert_directory(dir) {
        Ok(report) => {
            tracing::info!(
                output = %report.output.display(),
                pages = report.page_count(),
                "PDF created"
            );
            0
        }
        Err(err) => report_error(&err),
    }
}

/// Print the diagnostic for `err` and return its exit status.
///
/// A failed write is reported on stdout and the run still ends normally;
/// everything else goes to stderr with a non-zero status.
fn report_error(err: &Imgdir2PdfError) -> u8 {
    let human = humanize_error(err);
    match human.severity {
        Severity::Reported => {
            tracing::warn!(error = %err, "conversion finished without output");
            println!("{}", human.message);
        }
        Severity::Fatal => {
            tracing::error!(error = %err, "conversion failed");
            eprintln!("imgdir2pdf: {}\n{}", human.message, human.suggestion);
        }
    }
    human.exit_code
}
