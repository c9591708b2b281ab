use clap::Parser;
use folio::{PipelineBuilder, PipelineError};
use std::env;
use std::path::PathBuf;

/// Renders a JSON document description to PDF.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the document description
    document: PathBuf,

    /// Where to write the PDF
    output: PathBuf,

    /// Fail when elements had to be dropped for lack of space
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> Result<(), PipelineError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "folio=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    println!("Loading document from {}", args.document.display());
    let pipeline = PipelineBuilder::new()
        .with_document_file(&args.document)?
        .build()?;

    let report = pipeline.generate_to_file(&args.output)?;
    println!(
        "Wrote {} pages to {} ({} elements placed).",
        report.pages,
        args.output.display(),
        report.formatted
    );
    if !report.complete {
        eprintln!("{} elements did not fit and were dropped.", report.dropped);
        if args.strict {
            std::process::exit(2);
        }
    }
    Ok(())
}
