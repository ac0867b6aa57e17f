//! Pipeline and report integration tests.
//!
//! These tests exercise the full fetch → score → summarize → report
//! pipeline against the mock source, plus config file loading.

use vitals_tools::config::{load_config_file, AppConfig, Validatable};
use vitals_tools::crux::{mock_observations, FormFactor, MockSource, VitalsSource};
use vitals_tools::model::{FailureKind, MetricKey, MetricObservation, UrlAnalysis};
use vitals_tools::pipeline::{
    analyze_urls, analyze_with_source, exit_code_for, exit_codes, render_report, OutputTarget,
};
use vitals_tools::reports::{
    create_reporter_with_options, AnalysisReport, CsvReporter, JsonReporter, ReportConfig,
    ReportFormat, ReportGenerator, TextReporter,
};
use vitals_tools::scoring::MetricCatalog;

// ============================================================================
// Helpers
// ============================================================================

fn mock_config() -> AppConfig {
    AppConfig::builder().force_mock(true).quiet(true).build()
}

fn urls(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn mock_report(list: &[&str]) -> AnalysisReport {
    analyze_urls(&mock_config(), &urls(list))
        .expect("mock analysis should succeed")
        .report
}

// ============================================================================
// Analysis Stage Tests
// ============================================================================

mod analysis_stage {
    use super::*;

    #[test]
    fn mock_analysis_is_scored() {
        let report = mock_report(&["http://example.com/some/page"]);
        assert_eq!(report.entries.len(), 1);

        let entry = &report.entries[0];
        assert_eq!(entry.analysis.url, "https://example.com");
        assert_eq!(entry.analysis.original_url, "http://example.com/some/page");
        assert!(entry.analysis.is_mock_data);

        let score = entry.score.as_ref().expect("successful entries are scored");
        assert_eq!(score.overall_score, 93);
        assert!(report.has_mock_data());
        assert!(report.insights.is_none());
    }

    #[test]
    fn mock_score_snapshot() {
        let report = mock_report(&["example.com"]);
        let score = serde_json::to_value(report.entries[0].score.as_ref().unwrap()).unwrap();

        insta::with_settings!({ sort_maps => true }, {
            insta::assert_json_snapshot!(score, @r#"
            {
              "breakdown": {
                "cumulative_layout_shift": 100,
                "first_contentful_paint": 83,
                "interaction_to_next_paint": 100,
                "largest_contentful_paint": 90
              },
              "grade": "A",
              "overall_score": 93,
              "recommendations": []
            }
            "#);
        });
    }

    #[test]
    fn batch_preserves_input_order() {
        let report = mock_report(&["c.example", "a.example", "b.example"]);
        let order: Vec<_> = report
            .entries
            .iter()
            .map(|e| e.analysis.original_url.as_str())
            .collect();
        assert_eq!(order, vec!["c.example", "a.example", "b.example"]);
        assert_eq!(report.insights.unwrap().url_scores.len(), 3);
    }

    #[test]
    fn custom_catalog_changes_scores() {
        let mut catalog = MetricCatalog::web_vitals();
        // Mock LCP is 2800; make that "good"
        catalog.override_metric(MetricKey::LargestContentfulPaint, Some(3000.0), None, None);

        let outcome = analyze_with_source(
            &MockSource::new(),
            catalog,
            &mock_config(),
            &urls(&["example.com"]),
        )
        .unwrap();
        let score = outcome.report.entries[0].score.as_ref().unwrap();
        assert_eq!(score.breakdown[&MetricKey::LargestContentfulPaint], 100);
    }
}

// ============================================================================
// Unusable Upstream Data
// ============================================================================

/// Serves mock data, except for hosts containing "broken" whose LCP is negative.
struct PartlyBrokenSource;

impl VitalsSource for PartlyBrokenSource {
    fn fetch(&self, url: &str) -> UrlAnalysis {
        let mut observations = mock_observations();
        if url.contains("broken") {
            observations.insert(
                MetricKey::LargestContentfulPaint,
                MetricObservation::from_p75(-1.0),
            );
        }
        UrlAnalysis::success(format!("https://{url}"), url, observations, false)
    }

    fn name(&self) -> &'static str {
        "Test"
    }

    fn is_live(&self) -> bool {
        false
    }
}

mod unusable_data {
    use super::*;

    #[test]
    fn bad_entry_is_demoted_and_batch_survives() {
        let outcome = analyze_with_source(
            &PartlyBrokenSource,
            MetricCatalog::web_vitals(),
            &mock_config(),
            &urls(&["fine.example", "broken.example"]),
        )
        .expect("one unusable entry must not fail the run");

        let entries = &outcome.report.entries;
        assert_eq!(entries[0].score.as_ref().map(|s| s.overall_score), Some(93));
        assert!(entries[1].score.is_none());
        assert_eq!(
            entries[1].analysis.error.as_ref().map(|e| e.kind),
            Some(FailureKind::InvalidData)
        );
        assert_eq!(entries[1].analysis.url, "https://broken.example");

        assert_eq!(outcome.stats.successful, 1);
        assert_eq!(outcome.stats.failed, 1);
        assert_eq!(outcome.report.insights.unwrap().url_scores.len(), 1);
    }

    #[test]
    fn demoted_entries_trip_the_fetch_failure_gate() {
        let mut config = mock_config();
        let outcome = analyze_with_source(
            &PartlyBrokenSource,
            MetricCatalog::web_vitals(),
            &config,
            &urls(&["fine.example", "broken.example"]),
        )
        .unwrap();

        assert_eq!(exit_code_for(&config, &outcome), exit_codes::SUCCESS);
        config.behavior.fail_on_fetch_error = true;
        assert_eq!(exit_code_for(&config, &outcome), exit_codes::FETCH_FAILED);
    }
}

// ============================================================================
// Exit Code Tests
// ============================================================================

mod exit_code_gates {
    use super::*;

    #[test]
    fn min_score_gate_uses_lowest_score() {
        let mut config = mock_config();
        let outcome = analyze_urls(&config, &urls(&["a.example", "b.example"])).unwrap();

        config.scoring.min_score = Some(93);
        assert_eq!(exit_code_for(&config, &outcome), exit_codes::SUCCESS);

        config.scoring.min_score = Some(94);
        assert_eq!(exit_code_for(&config, &outcome), exit_codes::BELOW_MIN_SCORE);
    }

    #[test]
    fn no_gates_means_success() {
        let config = mock_config();
        let outcome = analyze_urls(&config, &urls(&["a.example"])).unwrap();
        assert_eq!(exit_code_for(&config, &outcome), exit_codes::SUCCESS);
    }
}

// ============================================================================
// Report Rendering Tests
// ============================================================================

mod rendering {
    use super::*;

    #[test]
    fn json_export_envelope() {
        let report = mock_report(&["example.com", "example.org"]);
        let json = JsonReporter::new()
            .generate(&report, &ReportConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["dataSource"], "Google Chrome UX Report");
        assert_eq!(value["totalRecords"], 2);
        assert_eq!(value["toolVersion"], env!("CARGO_PKG_VERSION"));
        assert!(value["exportDate"].as_str().is_some());

        let record = &value["records"][0];
        assert_eq!(record["url"], "https://example.com");
        assert_eq!(record["originalUrl"], "example.com");
        assert_eq!(record["success"], true);
        assert_eq!(record["isMockData"], true);
        assert_eq!(record["metrics"]["largest_contentful_paint"]["p75"], 2800.0);
        assert_eq!(record["score"]["overall_score"], 93);
        assert!(record.get("error").is_none());

        assert_eq!(value["insights"]["average_score"], 93);
    }

    #[test]
    fn csv_rows_match_mock_data() {
        let report = mock_report(&["example.com"]);
        let csv = CsvReporter::new()
            .generate(&report, &ReportConfig::default())
            .unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("URL,LCP (ms),CLS,FCP (ms),INP (ms)"));
        assert!(lines[0].ends_with("Score,Grade"));
        assert_eq!(
            lines[1],
            "\"https://example.com\",2800,0.08,2200,180,4500,0.15,3500,300,70,80,60,75,93,A"
        );
    }

    #[test]
    fn text_report_sections() {
        let report = mock_report(&["example.com", "example.org"]);
        let config = ReportConfig {
            show_recommendations: true,
            ..ReportConfig::default()
        };
        let text = TextReporter::new().generate(&report, &config).unwrap();

        assert!(text.starts_with("PERFORMANCE ANALYSIS REPORT"));
        assert!(text.contains("Total URLs Analyzed: 2"));
        assert!(text.contains("1. https://example.com"));
        assert!(text.contains("   LCP: 2800ms (95th: 4500ms)"));
        assert!(text.contains("   CLS: 0.08 (95th: 0.15)"));
        assert!(text.contains("   Score: 93/100 (Grade A, Excellent)"));
        assert!(text.contains("INSIGHTS"));
        assert!(text.ends_with("END OF REPORT"));
    }

    #[test]
    fn summary_without_color_has_no_escapes() {
        let report = mock_report(&["example.com", "example.org"]);
        let summary = create_reporter_with_options(ReportFormat::Summary, false)
            .generate(&report, &ReportConfig::default())
            .unwrap();
        assert!(!summary.contains('\x1b'));
        assert!(summary.contains("Insights"));
        assert!(summary.contains("example.org"));
    }

    #[test]
    fn auto_format_renders_json_for_files() {
        let report = mock_report(&["example.com"]);
        let dir = tempfile::tempdir().unwrap();
        let target = OutputTarget::File(dir.path().join("report.out"));

        let rendered = render_report(&mock_config(), &report, &target).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["totalRecords"], 1);
    }
}

// ============================================================================
// Config File Tests
// ============================================================================

mod config_files {
    use super::*;

    #[test]
    fn yaml_config_drives_analysis() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".vitals-tools.yaml");
        std::fs::write(
            &path,
            r"
source:
  force_mock: true
  form_factor: desktop
scoring:
  min_score: 95
  overrides:
    largest_contentful_paint:
      good: 3000
output:
  format: csv
",
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert!(config.is_valid());
        assert_eq!(config.source.form_factor, FormFactor::Desktop);
        assert_eq!(config.output.format, ReportFormat::Csv);

        let outcome = analyze_urls(&config, &urls(&["example.com"])).unwrap();
        let score = outcome.report.entries[0].score.as_ref().unwrap();
        assert_eq!(score.breakdown[&MetricKey::LargestContentfulPaint], 100);
        // LCP 100, CLS 100, FCP 83, INP 100
        assert_eq!(score.overall_score, 97);
        assert_eq!(exit_code_for(&config, &outcome), exit_codes::BELOW_MIN_SCORE);
    }

    #[test]
    fn invalid_overrides_fail_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vitals-tools.yaml");
        std::fs::write(
            &path,
            r"
scoring:
  overrides:
    cumulative_layout_shift:
      good: 0.5
      needs_improvement: 0.25
",
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert!(!config.is_valid());
    }
}
