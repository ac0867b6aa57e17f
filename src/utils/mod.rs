//! Shared utilities.

pub mod url;

pub use self::url::{display_url, extract_domain, is_valid_url, normalize_origin};
