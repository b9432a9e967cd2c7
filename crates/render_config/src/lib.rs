//! Render Configuration - Everything the capture/encode pipeline consumes
//!
//! This crate combines a resolved [`PageGeometry`](page_geometry::PageGeometry)
//! with fidelity, margin, file name and page-break rules into an immutable
//! [`RenderConfiguration`], and derives the html2pdf [`EncoderOptions`] from it.
//!
//! # Example
//!
//! ```rust
//! use render_config::{EncoderOptions, PrintRequest};
//!
//! let config = PrintRequest::new()
//!     .with_format("letter")
//!     .with_fidelity("high")
//!     .resolve()
//!     .unwrap();
//! assert_eq!(config.scale(), 2.0);
//!
//! let options = EncoderOptions::from_config(&config);
//! assert_eq!(options.js_pdf.format, [1278, 1650]);
//! ```

mod config;
mod encoder;
mod error;
mod fidelity;
mod page_breaks;
mod request;

pub use config::*;
pub use encoder::*;
pub use error::*;
pub use fidelity::*;
pub use page_breaks::*;
pub use request::*;
