//! PDF export of a student's career plan.

pub mod font_metrics;
pub mod pdf;

use thiserror::Error;

pub use pdf::{attachment_disposition, plan_filename, render_career_plan};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
