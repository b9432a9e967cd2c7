//! Page Geometry - Length normalization and page size resolution
//!
//! This crate turns loosely typed print parameters (format name, custom
//! dimensions, orientation, zoom) into an exact pixel page geometry for the
//! downstream capture and PDF encoding pipeline.
//!
//! # Example
//!
//! ```rust
//! use page_geometry::{resolve, RenderMode};
//!
//! let geometry = resolve("a4", Some("100mm x 40mm"), "landscape", "1").unwrap();
//! assert_eq!((geometry.width_px, geometry.height_px), (1181, 472));
//! assert_eq!(geometry.render_mode, RenderMode::Label);
//! ```

mod error;
mod format;
mod geometry;
mod resolver;
pub mod units;

pub use error::*;
pub use format::*;
pub use geometry::*;
pub use resolver::*;
pub use units::{to_pixels, Length, LengthUnit, MAX_AXIS_PX, PRINT_DPI};
