//! Analyze and compare command handlers.

use crate::config::{AppConfig, Validatable};
use crate::pipeline::{exit_codes, run_analysis, PipelineError};
use crate::utils::is_valid_url;
use anyhow::{bail, Result};

/// Run the analyze command for a single URL.
///
/// Returns the exit code for the run.
pub fn run_analyze(config: AppConfig, url: String) -> Result<i32> {
    check_config(&config)?;
    warn_on_suspicious_urls(std::slice::from_ref(&url));
    run(&config, &[url])
}

/// Run the compare command for two or more URLs.
///
/// Returns the exit code for the run.
pub fn run_compare(config: AppConfig, urls: Vec<String>) -> Result<i32> {
    if urls.len() < 2 {
        bail!("compare needs at least two URLs (got {})", urls.len());
    }
    check_config(&config)?;
    warn_on_suspicious_urls(&urls);
    run(&config, &urls)
}

fn run(config: &AppConfig, urls: &[String]) -> Result<i32> {
    match run_analysis(config, urls) {
        Ok(code) => Ok(code),
        Err(PipelineError::NoUrls) => bail!("no URLs to analyze"),
        Err(err) => {
            tracing::error!("{err}");
            Ok(exit_codes::ERROR)
        }
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    for error in &errors {
        tracing::error!("config: {error}");
    }
    bail!("invalid configuration ({} error(s))", errors.len())
}

/// Unparseable inputs still get analyzed (they normalize to the fallback
/// origin) but the user should know.
fn warn_on_suspicious_urls(urls: &[String]) {
    for url in urls.iter().filter(|u| !is_valid_url(u)) {
        tracing::warn!("'{url}' does not look like a valid URL");
    }
}
