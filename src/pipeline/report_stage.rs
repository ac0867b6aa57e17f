//! Report output stage.
//!
//! Resolves the effective format, renders the report and writes it to
//! stdout or a file.

use crate::config::{AppConfig, OutputConfig};
use crate::reports::{create_reporter_with_options, AnalysisReport, ReportConfig, ReportFormat};
use anyhow::Result;

use super::OutputTarget;

/// Format and coloring chosen for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOutput {
    pub format: ReportFormat,
    pub colored: bool,
}

impl ResolvedOutput {
    /// `auto` becomes the summary view on a terminal and JSON anywhere
    /// else. Colors need a terminal, no `--no-color` and no `NO_COLOR`.
    #[must_use]
    pub fn for_target(output: &OutputConfig, target: &OutputTarget) -> Self {
        let interactive = target.is_interactive();
        let format = match output.format {
            ReportFormat::Auto if interactive => ReportFormat::Summary,
            ReportFormat::Auto => ReportFormat::Json,
            other => other,
        };
        let colored = interactive && !output.no_color && std::env::var_os("NO_COLOR").is_none();
        Self { format, colored }
    }
}

/// Render `report` per the output configuration and write it out.
pub fn output_report(config: &AppConfig, report: &AnalysisReport) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let rendered = render_report(config, report, &target)?;
    target.write(&rendered)
}

/// Render `report` to a string for the given target.
pub fn render_report(
    config: &AppConfig,
    report: &AnalysisReport,
    target: &OutputTarget,
) -> Result<String> {
    let resolved = ResolvedOutput::for_target(&config.output, target);

    let report_config = ReportConfig {
        show_recommendations: config.output.show_recommendations,
        title: None,
        catalog: config.scoring.catalog(),
    };

    tracing::debug!(format = %resolved.format, colored = resolved.colored, "rendering report");

    let reporter = create_reporter_with_options(resolved.format, resolved.colored);
    Ok(reporter.generate(report, &report_config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file_target() -> OutputTarget {
        OutputTarget::File(PathBuf::from("vitals.out"))
    }

    #[test]
    fn test_explicit_format_is_kept() {
        let output = OutputConfig {
            format: ReportFormat::Csv,
            ..OutputConfig::default()
        };
        let resolved = ResolvedOutput::for_target(&output, &OutputTarget::Stdout);
        assert_eq!(resolved.format, ReportFormat::Csv);
    }

    #[test]
    fn test_auto_on_file_is_uncolored_json() {
        let resolved = ResolvedOutput::for_target(&OutputConfig::default(), &file_target());
        assert_eq!(
            resolved,
            ResolvedOutput {
                format: ReportFormat::Json,
                colored: false,
            }
        );
    }

    #[test]
    fn test_summary_to_file_is_uncolored() {
        let output = OutputConfig {
            format: ReportFormat::Summary,
            ..OutputConfig::default()
        };
        assert!(!ResolvedOutput::for_target(&output, &file_target()).colored);
    }
}
