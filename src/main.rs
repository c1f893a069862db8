use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use render_pdf::dto::ReportDto;
use render_pdf::error::RenderError;
use render_pdf::renderer;

/// Renders a report DTO JSON file into a one-page placeholder PDF.
///
/// The output dumps the DTO's pretty-printed text as plain lines; it is a
/// stub artifact, not a formatted report.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Stub renderer that dumps a report DTO JSON file into a one-page PDF"
)]
struct Cli {
    /// Path to the report DTO JSON file.
    dto: PathBuf,

    /// Path of the PDF file to write.
    output: PathBuf,
}

fn main() {
    env_logger::init();

    // Wrong argument count must exit 1 with usage on stderr, so clap's
    // default exit code 2 is not used. Help and version keep clap behavior.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            err.print().ok();
            process::exit(1);
        }
    };

    if !cli.dto.exists() {
        eprintln!("Error: DTO file not found: {}", cli.dto.display());
        process::exit(1);
    }

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        print_error_sources(&err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), RenderError> {
    let dto = ReportDto::load(&cli.dto)?;
    renderer::render_to_file(&dto, &cli.output)?;
    println!("Wrote stub PDF to {}", cli.output.display());
    Ok(())
}

fn print_error_sources(error: &(dyn Error + 'static)) {
    let mut error = error;
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
