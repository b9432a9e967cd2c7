//! pagefit - print parameter resolver
//!
//! Reads a print request from flags and/or a JSON file, resolves the page
//! geometry and writes the render configuration, the html2pdf options, the
//! print document or its data URL.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{load_request, render, Args};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging; stdout carries the output
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let request = load_request(&args)?;
    let output = render(&request, args.emit, args.shell_options())?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {:?} output to {}", args.emit, path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}
