//! Print document
//!
//! Wraps the content and its render configuration into a self-contained HTML
//! page. The page loads html2pdf, waits for layout to settle, captures
//! `#content-to-print` and saves the PDF under the configured file name.

use render_config::{EncoderOptions, PrintRequest, RenderConfiguration};
use serde::{Deserialize, Serialize};

use crate::{stylesheet, Result};

/// Default html2pdf bundle
pub const HTML2PDF_BUNDLE_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/html2pdf.js/0.9.2/html2pdf.bundle.min.js";

/// Default wait between page load and capture
pub const DEFAULT_CAPTURE_DELAY_MS: u64 = 800;

/// Prefix of emitted data URLs
pub const DATA_URL_PREFIX: &str = "data:text/html;charset=utf-8,";

/// Options for the document chrome around the content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellOptions {
    /// Where the html2pdf bundle is loaded from
    pub script_src: String,
    /// Milliseconds to wait after load before capturing
    pub capture_delay_ms: u64,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            script_src: HTML2PDF_BUNDLE_URL.to_string(),
            capture_delay_ms: DEFAULT_CAPTURE_DELAY_MS,
        }
    }
}

/// A renderable print document
#[derive(Debug, Clone)]
pub struct PrintDocument {
    content: String,
    config: RenderConfiguration,
    shell: ShellOptions,
}

impl PrintDocument {
    pub fn new(content: impl Into<String>, config: RenderConfiguration) -> Self {
        Self {
            content: content.into(),
            config,
            shell: ShellOptions::default(),
        }
    }

    /// Resolve a request and wrap its content
    pub fn from_request(request: &PrintRequest) -> Result<Self> {
        let config = request.resolve()?;
        Ok(Self::new(request.content(), config))
    }

    pub fn with_shell_options(mut self, shell: ShellOptions) -> Self {
        self.shell = shell;
        self
    }

    pub fn config(&self) -> &RenderConfiguration {
        &self.config
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Render the complete HTML document
    pub fn render_html(&self) -> Result<String> {
        let options = EncoderOptions::from_config(&self.config);
        let options_json = script_safe(&options.to_json()?);
        let file_name_json = script_safe(&serde_json::to_string(self.config.file_name())?);
        let script_src = html_attribute(&self.shell.script_src);
        let css = stylesheet(self.config.geometry());

        let mut html = String::with_capacity(css.len() + self.content.len() + 2048);
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<script src=\"{}\"></script>\n", script_src));
        html.push_str(&format!("<style>\n{}</style>\n", css));
        html.push_str("</head>\n<body>\n");
        html.push_str("<div id=\"status-bar\">Generating PDF...</div>\n");
        html.push_str("<div id=\"preview-container\">\n");
        html.push_str(&format!(
            "<div id=\"content-to-print\">{}</div>\n",
            self.content
        ));
        html.push_str("</div>\n");
        html.push_str(SUCCESS_OVERLAY);
        html.push_str(&capture_script(
            &options_json,
            &file_name_json,
            self.shell.capture_delay_ms,
        ));
        html.push_str("</body>\n</html>\n");

        tracing::debug!(
            "Rendered print document for {:?} ({} bytes)",
            self.config.file_name(),
            html.len()
        );

        Ok(html)
    }

    /// Render the document as a `data:text/html` URL
    pub fn to_data_url(&self) -> Result<String> {
        let html = self.render_html()?;
        Ok(format!("{}{}", DATA_URL_PREFIX, urlencoding::encode(&html)))
    }
}

const SUCCESS_OVERLAY: &str = "<div id=\"success-overlay\">
<div class=\"success-icon\">&#9989;</div>
<h2>Download Started!</h2>
<p>You can close this window now.</p>
</div>
";

fn capture_script(options_json: &str, file_name_json: &str, delay_ms: u64) -> String {
    format!(
        r#"<script>
window.onload = function() {{
  setTimeout(function() {{
    var element = document.getElementById('content-to-print');
    var opt = {options_json};
    html2pdf().set(opt).from(element).toPdf().get('pdf').then(function(pdf) {{
      pdf.save({file_name_json});
      document.getElementById('success-overlay').style.display = 'flex';
      document.getElementById('status-bar').style.display = 'none';
    }}).catch(function(error) {{
      console.error(error);
      document.getElementById('status-bar').innerText = "Error";
      document.getElementById('status-bar').style.backgroundColor = "red";
    }});
  }}, {delay_ms});
}};
</script>
"#
    )
}

/// JSON embedded in a script element must not contain `</`
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn html_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
