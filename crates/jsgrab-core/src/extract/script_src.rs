//! `<script src>` scanning over captured HTML bodies.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `<script ... src="...">` with either quote style, any case.
static SCRIPT_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<script[^>]+src=["']([^"']*)["']"#).expect("script src pattern")
});

/// Extracts `src` attribute values whose query-stripped path contains `.js`.
///
/// The body is decoded lossily, so malformed UTF-8 or broken markup yields
/// whatever the pattern still matches, never an error.
pub fn script_js_srcs(body: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(body);
    SCRIPT_SRC
        .captures_iter(&text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|src| {
            let path = src.split('?').next().unwrap_or("");
            path.contains(".js")
        })
        .collect()
}
