//! ROI Render: reports as human-readable text
//!
//! Renders a [`Report`] through Handlebars templates. The shipped
//! templates live in `templates/report.yaml` and are compiled into the
//! crate; a different file can be loaded at runtime.
//!
//! # Example
//!
//! ```ignore
//! use roi_render::render_report;
//!
//! let text = render_report(&report)?;
//! println!("{}", text);
//! ```

pub mod format;
pub mod renderer;
pub mod templates;

pub use renderer::ReportRenderer;
pub use templates::TemplatesFile;

use roi_core::RoiError;
use roi_engine::Report;
use thiserror::Error;

/// Template used by [`render_report`]
pub const SUMMARY_TEMPLATE: &str = "report_summary";

/// Template used by [`render_headline`]
pub const HEADLINE_TEMPLATE: &str = "report_headline";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template load failed: {0}")]
    Template(String),
    #[error("Render failed: {0}")]
    Render(String),
}

impl From<RenderError> for RoiError {
    fn from(err: RenderError) -> Self {
        RoiError::RenderError(err.to_string())
    }
}

/// Render the full multi-section summary with the built-in templates
pub fn render_report(report: &Report) -> Result<String, RenderError> {
    ReportRenderer::builtin()?.render(SUMMARY_TEMPLATE, report)
}

/// Render a one-line summary with the built-in templates
pub fn render_headline(report: &Report) -> Result<String, RenderError> {
    ReportRenderer::builtin()?.render(HEADLINE_TEMPLATE, report)
}
