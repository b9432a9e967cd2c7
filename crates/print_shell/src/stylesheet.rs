//! Page stylesheet
//!
//! Static chrome (status bar, preview container, success overlay) plus the
//! `#content-to-print` rule sized from the resolved geometry.

use page_geometry::PageGeometry;

const BASE_STYLES: &str = r#"* { box-sizing: border-box; }
::-webkit-scrollbar { width: 0px; height: 0px; display: none; }

body {
  margin: 0; padding: 0;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
  background-color: #f0f0f0;
  overflow: hidden;
  scrollbar-width: none;
}

#status-bar {
  position: fixed; top: 0; left: 0; width: 100%;
  background: #333; color: white; text-align: center;
  padding: 8px; font-size: 14px; z-index: 100;
}

#preview-container {
  display: flex; justify-content: center;
  padding-top: 60px; padding-bottom: 40px;
  width: 100%;
}

#success-overlay {
  position: fixed; top: 0; left: 0; width: 100vw; height: 100vh;
  background: #ffffff; z-index: 9999; display: none;
  flex-direction: column; justify-content: center; align-items: center; text-align: center;
}
h2 { margin: 10px 0 5px; font-size: 20px; color: #333; }
p { margin: 0; font-size: 14px; color: #666; }
.success-icon { font-size: 50px; margin-bottom: 20px; }
"#;

/// Height declaration for the content container.
///
/// Labels are clipped to exactly one page; flowing documents only get a
/// minimum height and grow with their content.
pub fn height_rule(geometry: &PageGeometry) -> String {
    if geometry.is_label() {
        format!("height: {}px; overflow: hidden;", geometry.height_px)
    } else {
        format!("min-height: {}px; overflow: visible;", geometry.height_px)
    }
}

/// The `#content-to-print` rule
pub fn content_rule(geometry: &PageGeometry) -> String {
    format!(
        "#content-to-print {{\n  width: {}px;\n  {}\n  background-color: #ffffff;\n  margin: 0; padding: 0;\n  box-shadow: none;\n}}\n",
        geometry.width_px,
        height_rule(geometry)
    )
}

/// Complete stylesheet for the print document
pub fn stylesheet(geometry: &PageGeometry) -> String {
    let mut css = String::from(BASE_STYLES);
    css.push('\n');
    css.push_str(&content_rule(geometry));
    css
}
