//! Print Shell - Self-contained print documents
//!
//! This crate wraps content markup and a resolved render configuration into
//! an HTML page that drives html2pdf, and can emit that page as a
//! `data:text/html` URL.
//!
//! - `stylesheet`: page CSS, including the label/flow container sizing
//! - `document`: the HTML document, capture script and data URL

mod document;
mod error;
mod stylesheet;

pub use document::*;
pub use error::*;
pub use stylesheet::*;
