//! Pipeline orchestration for analysis runs.
//!
//! This module provides shared orchestration logic for fetch → score →
//! summarize → report workflows, reducing duplication across CLI command
//! handlers.

mod analyze_stage;
mod output;
mod report_stage;

pub use analyze_stage::{analyze_urls, analyze_with_source, build_report, AnalysisOutcome};
pub use output::OutputTarget;
pub use report_stage::{output_report, render_report, ResolvedOutput};

use crate::config::AppConfig;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// No URLs were supplied
    #[error("No URLs to analyze")]
    NoUrls,

    /// The field data source could not be set up
    #[error("Analysis failed: {source}")]
    AnalysisFailed {
        #[source]
        source: crate::error::VitalsError,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - every gate passed
    pub const SUCCESS: i32 = 0;
    /// At least one URL scored below the configured minimum
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// At least one fetch failed and failures were configured to be fatal
    pub const FETCH_FAILED: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Run a full analysis and write the report.
///
/// Returns the process exit code for the outcome.
pub fn run_analysis(config: &AppConfig, urls: &[String]) -> Result<i32, PipelineError> {
    if urls.is_empty() {
        return Err(PipelineError::NoUrls);
    }

    let outcome =
        analyze_urls(config, urls).map_err(|source| PipelineError::AnalysisFailed { source })?;

    output_report(config, &outcome.report)
        .map_err(|source| PipelineError::ReportFailed { source })?;

    Ok(exit_code_for(config, &outcome))
}

/// Exit code for a finished analysis.
///
/// Fatal fetch failures take precedence over the score gate.
#[must_use]
pub fn exit_code_for(config: &AppConfig, outcome: &AnalysisOutcome) -> i32 {
    if config.behavior.fail_on_fetch_error && outcome.stats.has_failures() {
        tracing::warn!(failed = outcome.stats.failed, "fetch failures are fatal");
        return exit_codes::FETCH_FAILED;
    }

    if let (Some(min_score), Some(lowest)) = (config.scoring.min_score, outcome.report.min_score())
    {
        if lowest < min_score {
            tracing::warn!(lowest, min_score, "score below minimum");
            return exit_codes::BELOW_MIN_SCORE;
        }
    }

    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crux::{FetchStats, MockSource};
    use crate::scoring::MetricCatalog;

    fn mock_outcome(config: &AppConfig) -> AnalysisOutcome {
        analyze_with_source(
            &MockSource::new(),
            MetricCatalog::web_vitals(),
            config,
            &["example.com".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::BELOW_MIN_SCORE, 1);
        assert_eq!(exit_codes::FETCH_FAILED, 2);
        assert_eq!(exit_codes::ERROR, 3);
    }

    #[test]
    fn test_min_score_gate() {
        // Mock data scores 93
        let passing = AppConfig::builder().min_score(Some(90)).build();
        assert_eq!(
            exit_code_for(&passing, &mock_outcome(&passing)),
            exit_codes::SUCCESS
        );

        let failing = AppConfig::builder().min_score(Some(95)).build();
        assert_eq!(
            exit_code_for(&failing, &mock_outcome(&failing)),
            exit_codes::BELOW_MIN_SCORE
        );
    }

    #[test]
    fn test_fetch_failure_gate() {
        let config = AppConfig::builder()
            .fail_on_fetch_error(true)
            .min_score(Some(95))
            .build();
        let mut outcome = mock_outcome(&config);
        outcome.stats = FetchStats {
            total: 1,
            failed: 1,
            ..FetchStats::default()
        };
        assert_eq!(exit_code_for(&config, &outcome), exit_codes::FETCH_FAILED);
    }

    #[test]
    fn test_run_analysis_rejects_empty_input() {
        let err = run_analysis(&AppConfig::default(), &[]).unwrap_err();
        assert!(matches!(err, PipelineError::NoUrls));
    }
}
