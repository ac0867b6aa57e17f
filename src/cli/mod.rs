//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod analyze;

pub use analyze::{run_analyze, run_compare};

// Re-export config types used by handlers
pub use crate::config::AppConfig;
