//! Collision-safe local filename derivation from a URL.

use url::Url;

/// Derives the local filename for a fetched JS resource.
///
/// Takes the final path segment, falling back to the host for root URLs;
/// strips the segment's trailing extension; maps every character outside
/// `[A-Za-z0-9]` to `_`; prefixes `js_` when the result is empty or starts
/// with a digit; and appends `.js`. Deterministic, but not guaranteed unique
/// across a URL set -- distinct URLs can collide on the same name.
pub fn safe_filename(url: &str) -> String {
    let stem = match Url::parse(url) {
        Ok(parsed) => {
            let basename = parsed.path().rsplit('/').next().unwrap_or("");
            if basename.is_empty() {
                // Root or trailing-slash URL: the host stands in whole,
                // extension intact (x.com -> x_com).
                parsed.host_str().unwrap_or("").to_string()
            } else {
                strip_extension(basename).to_string()
            }
        }
        // Not a parseable URL; sanitize the whole string rather than fail.
        Err(_) => url.to_string(),
    };

    let mut safe: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if safe.is_empty() || safe.starts_with(|c: char| c.is_ascii_digit()) {
        safe.insert_str(0, "js_");
    }
    safe.push_str(".js");
    safe
}

/// Drops the trailing `.ext` (if any), keeping dotfiles intact.
fn strip_extension(segment: &str) -> &str {
    match segment.rfind('.') {
        Some(idx) if idx > 0 => &segment[..idx],
        _ => segment,
    }
}
