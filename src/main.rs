//! Replyfmt CLI
//!
//! Formats a captured assistant reply (or a whole webhook response body) into
//! display-ready markup.

use clap::Parser;
use replyfmt::{extract_reply, Formatter};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Replyfmt - format assistant chat replies into styled markup
#[derive(Parser, Debug)]
#[command(name = "replyfmt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file with the raw reply; reads stdin when omitted
    input: Option<PathBuf>,

    /// Treat the input as a webhook JSON response body and extract its reply field
    #[arg(long)]
    json: bool,

    /// Escape markup-significant characters before formatting (untrusted sources)
    #[arg(long)]
    escape: bool,

    /// Write the formatted markup to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output: show pipeline diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so piped output stays clean markup
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let body = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let raw = if cli.json {
        debug!("Extracting reply field from JSON body");
        extract_reply(&body)?
    } else {
        body
    };

    info!("Formatting reply ({} bytes)", raw.len());
    let formatter = Formatter::new().with_escape_input(cli.escape);
    let formatted = formatter.format(&raw);

    match &cli.output {
        Some(path) => std::fs::write(path, &formatted)?,
        None => println!("{}", formatted),
    }

    Ok(())
}
