//! Report generation for analysis results.
//!
//! This module provides multiple output formats for scored field data:
//! - Summary: Compact colored terminal output
//! - JSON: Structured export for programmatic integration
//! - CSV: One row per URL for spreadsheet import
//! - Text: Plain-text performance report

mod csv;
mod json;
mod summary;
mod text;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use text::TextReporter;
pub use types::{
    AnalysisReport, ReportConfig, ReportEntry, ReportFormat, ReportMetadata, DATA_SOURCE,
};

use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render an analysis report
    fn generate(
        &self,
        report: &AnalysisReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        report: &AnalysisReport,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let rendered = self.generate(report, config)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
///
/// `Auto` is expected to be resolved by the caller; if it reaches here it
/// renders as a summary.
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
        ReportFormat::Text => Box::new(TextReporter::new()),
    }
}
