//! JS URL discovery over captured exchanges.

mod classify;
mod script_src;

pub use classify::{classify, Verdict};
pub use script_src::script_js_srcs;

use url::Url;

use crate::exchange::{BaseScope, Exchange};
use crate::urlset::JsUrlSet;

/// Collects JS URLs from `exchanges`, restricted to `scope`.
///
/// URL-string and Content-Type hits are added verbatim; HTML bodies are
/// scanned for `<script src>` values, with relative ones resolved against
/// the exchange's own URL. A URL-string hit short-circuits: its body is
/// never scanned. Exchanges outside the scope are skipped entirely, and an
/// empty input yields an empty set.
pub fn extract(exchanges: &[Exchange], scope: &BaseScope) -> JsUrlSet {
    let mut urls = JsUrlSet::new();
    for exchange in exchanges {
        if !scope.contains(&exchange.url) {
            continue;
        }
        match classify(exchange) {
            Verdict::JsByUrl | Verdict::JsByContentType => {
                tracing::debug!(url = %exchange.url, "classified as JS");
                urls.insert(exchange.url.clone());
            }
            Verdict::HtmlPage => {
                if let Some(body) = exchange.response.as_ref().and_then(|r| r.body.as_deref()) {
                    scan_html(&exchange.url, body, &mut urls);
                }
            }
            Verdict::NotJs => {}
        }
    }
    urls
}

/// Adds script `src` hits from one HTML body. Values already starting with
/// a scheme are taken verbatim; the rest resolve per RFC 3986 against the
/// page URL. Unresolvable values are dropped, not errors.
fn scan_html(page_url: &str, body: &[u8], urls: &mut JsUrlSet) {
    let page = Url::parse(page_url).ok();
    for src in script_js_srcs(body) {
        if src.starts_with("http") {
            tracing::debug!(src = %src, "script src (absolute)");
            urls.insert(src);
            continue;
        }
        match page.as_ref().and_then(|p| p.join(&src).ok()) {
            Some(resolved) => {
                tracing::debug!(src = %src, resolved = %resolved, "script src (relative)");
                urls.insert(resolved.to_string());
            }
            None => tracing::debug!(src = %src, page = %page_url, "unresolvable script src"),
        }
    }
}
