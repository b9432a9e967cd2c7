//! Command-line arguments and request loading

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use print_shell::{PrintDocument, ShellOptions};
use render_config::{EncoderOptions, PrintRequest};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON print request; flags override its fields
    #[arg(long)]
    pub request: Option<PathBuf>,

    /// Content markup
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read content markup from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Output file name used by the PDF download
    #[arg(long)]
    pub file_name: Option<String>,

    /// Page format preset (a0-a10, letter, legal, credit_card)
    #[arg(long)]
    pub format: Option<String>,

    /// Zoom factor
    #[arg(long)]
    pub zoom: Option<String>,

    /// portrait or landscape
    #[arg(long)]
    pub orientation: Option<String>,

    /// Uniform margin in encoder units
    #[arg(long, allow_hyphen_values = true)]
    pub margin: Option<String>,

    /// Selectors to break before (comma-separated)
    #[arg(long)]
    pub break_before: Option<String>,

    /// Selectors to break after (comma-separated)
    #[arg(long)]
    pub break_after: Option<String>,

    /// Selectors to keep on one page (comma-separated)
    #[arg(long)]
    pub break_avoid: Option<String>,

    /// low, standard or high
    #[arg(long)]
    pub fidelity: Option<String>,

    /// Custom page size, e.g. "100x40", "100mm,40mm", "400px x 300px"
    #[arg(long)]
    pub custom_dimensions: Option<String>,

    /// What to write
    #[arg(long, value_enum, default_value_t = Emit::DataUrl)]
    pub emit: Emit,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Location of the html2pdf bundle
    #[arg(long)]
    pub script_src: Option<String>,

    /// Delay before capture in milliseconds
    #[arg(long)]
    pub capture_delay_ms: Option<u64>,
}

/// Output kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// Render configuration as JSON
    Config,
    /// html2pdf options as JSON
    Options,
    /// The HTML print document
    Html,
    /// The HTML print document as a data URL
    DataUrl,
}

impl Args {
    /// Request fields given as flags
    pub fn overrides(&self) -> PrintRequest {
        PrintRequest {
            content: self.content.clone(),
            file_name: self.file_name.clone(),
            format: self.format.clone(),
            zoom: self.zoom.clone(),
            orientation: self.orientation.clone(),
            margin: self.margin.clone(),
            break_before: self.break_before.clone(),
            break_after: self.break_after.clone(),
            break_avoid: self.break_avoid.clone(),
            fidelity: self.fidelity.clone(),
            custom_dimensions: self.custom_dimensions.clone(),
        }
    }

    pub fn shell_options(&self) -> ShellOptions {
        let mut shell = ShellOptions::default();
        if let Some(src) = &self.script_src {
            shell.script_src = src.clone();
        }
        if let Some(delay) = self.capture_delay_ms {
            shell.capture_delay_ms = delay;
        }
        shell
    }
}

/// Build the print request from the request file, content file and flags
pub fn load_request(args: &Args) -> Result<PrintRequest> {
    let base = match &args.request {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read request file {}", path.display()))?;
            PrintRequest::from_json(&json)
                .with_context(|| format!("Invalid request file {}", path.display()))?
        }
        None => PrintRequest::default(),
    };

    let mut request = base.merge(args.overrides());

    if let Some(path) = &args.content_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file {}", path.display()))?;
        request.content = Some(content);
    }

    Ok(request)
}

/// Produce the requested output for a print request
pub fn render(request: &PrintRequest, emit: Emit, shell: ShellOptions) -> Result<String> {
    let config = request.resolve()?;

    let output = match emit {
        Emit::Config => config.to_json()?,
        Emit::Options => EncoderOptions::from_config(&config).to_json_pretty()?,
        Emit::Html => PrintDocument::new(request.content(), config)
            .with_shell_options(shell)
            .render_html()?,
        Emit::DataUrl => PrintDocument::new(request.content(), config)
            .with_shell_options(shell)
            .to_data_url()?,
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("pagefit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.emit, Emit::DataUrl);
        assert_eq!(args.overrides(), PrintRequest::default());
        assert_eq!(args.shell_options(), ShellOptions::default());
    }

    #[test]
    fn test_flags_map_to_request() {
        let args = parse(&[
            "--format",
            "letter",
            "--orientation",
            "landscape",
            "--custom-dimensions",
            "100x40",
            "--margin",
            "-4",
            "--emit",
            "options",
        ]);
        let request = args.overrides();
        assert_eq!(request.format.as_deref(), Some("letter"));
        assert_eq!(request.orientation.as_deref(), Some("landscape"));
        assert_eq!(request.custom_dimensions.as_deref(), Some("100x40"));
        assert_eq!(request.margin.as_deref(), Some("-4"));
        assert_eq!(args.emit, Emit::Options);
    }

    #[test]
    fn test_content_conflicts_with_content_file() {
        let result = Args::try_parse_from([
            "pagefit",
            "--content",
            "<p>x</p>",
            "--content-file",
            "page.html",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_config_output() {
        let request = PrintRequest::new().with_fidelity("high");
        let output = render(&request, Emit::Config, ShellOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["scale"], 2.0);
        assert_eq!(value["geometry"]["widthPx"], 1240);
    }

    #[test]
    fn test_render_data_url_output() {
        let output = render(&PrintRequest::new(), Emit::DataUrl, ShellOptions::default()).unwrap();
        assert!(output.starts_with("data:text/html;charset=utf-8,"));
    }

    #[test]
    fn test_render_reports_empty_page() {
        let request = PrintRequest::new().with_custom_dimensions("0,0");
        assert!(render(&request, Emit::Html, ShellOptions::default()).is_err());
    }
}
