#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz URL normalization and the display helpers.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let origin = vitals_tools::utils::normalize_origin(s);
        assert!(origin.starts_with("https://"));
        let _ = vitals_tools::utils::is_valid_url(s);
        let _ = vitals_tools::utils::display_url(s);
        let _ = vitals_tools::utils::extract_domain(s);
    }
});
