//! Print the OpenAPI document as JSON.

use std::io::Write;

use clap::Parser;
use clinic_backend::ApiDoc;
use utoipa::OpenApi;

/// Export the clinic scheduling OpenAPI document.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump")]
struct Args {
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let doc = ApiDoc::openapi();
    let json = if args.pretty {
        doc.to_pretty_json()?
    } else {
        doc.to_json()?
    };
    writeln!(std::io::stdout().lock(), "{json}")?;
    Ok(())
}
