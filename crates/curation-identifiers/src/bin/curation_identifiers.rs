//! Command-line front end for the identifier core.

use clap::{Parser, Subcommand};
use curation_identifiers::{
    classify, identifier_url, normalize, validate_format, validate_orcid, IdentifierType,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "curation-identifiers", version, about = "Detect, normalize and validate identifiers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect the identifier type
    Classify { input: String },
    /// Strip resolver and scheme prefixes (type is detected when omitted)
    Normalize {
        input: String,
        #[arg(long)]
        kind: Option<IdentifierType>,
    },
    /// Check the format against a given type
    Validate {
        input: String,
        #[arg(long)]
        kind: IdentifierType,
    },
    /// Check ORCID format and checksum
    Orcid { input: String },
    /// Build the resolver URL (type is detected when omitted)
    Url {
        input: String,
        #[arg(long)]
        kind: Option<IdentifierType>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Command::Classify { input } => {
            let kind = classify(&input);
            json!({ "input": input, "type": kind })
        }
        Command::Normalize { input, kind } => {
            let kind = kind.unwrap_or_else(|| classify(&input));
            json!({ "input": input, "type": kind, "normalized": normalize(&input, kind) })
        }
        Command::Validate { input, kind } => serde_json::to_value(validate_format(&input, kind))?,
        Command::Orcid { input } => serde_json::to_value(validate_orcid(&input))?,
        Command::Url { input, kind } => {
            let kind = kind.unwrap_or_else(|| classify(&input));
            json!({ "input": input, "type": kind, "url": identifier_url(kind, &input) })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
