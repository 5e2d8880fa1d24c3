//! Pure content classification for captured exchanges.

use crate::exchange::Exchange;

/// Classification verdict for one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The URL string itself contains `.js`; include it verbatim.
    JsByUrl,
    /// The response Content-Type says javascript; include the URL verbatim.
    JsByContentType,
    /// HTML page; the body is worth scanning for script tags.
    HtmlPage,
    /// Nothing JS-related.
    NotJs,
}

/// Classifies an exchange without touching its body.
///
/// The `.js` substring check runs on the whole URL string, case-insensitive,
/// and takes precedence over any header evidence: a `.JS` URL served as
/// `text/plain` still counts. A missing or malformed Content-Type behaves
/// like an empty one and falls through to `NotJs`.
pub fn classify(exchange: &Exchange) -> Verdict {
    if exchange.url.to_ascii_lowercase().contains(".js") {
        return Verdict::JsByUrl;
    }
    let content_type = exchange
        .response_header("Content-Type")
        .map(|v| v.to_ascii_lowercase())
        .unwrap_or_default();
    if content_type.contains("javascript") {
        Verdict::JsByContentType
    } else if content_type.contains("text/html") {
        Verdict::HtmlPage
    } else {
        Verdict::NotJs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::{ExchangeResponse, Header};

    fn exchange(url: &str, content_type: Option<&str>) -> Exchange {
        Exchange {
            url: url.to_string(),
            response: content_type.map(|ct| ExchangeResponse {
                status: 200,
                headers: vec![Header {
                    name: "Content-Type".to_string(),
                    value: ct.to_string(),
                }],
                body: None,
            }),
        }
    }

    #[test]
    fn url_extension_wins_over_content_type() {
        // Literal case from the contract: .JS anywhere beats text/plain.
        let e = exchange("http://x.com/app.JS?v=2", Some("text/plain"));
        assert_eq!(classify(&e), Verdict::JsByUrl);
    }

    #[test]
    fn js_substring_matches_anywhere_in_url() {
        let e = exchange("http://x.com/download?file=lib.js", None);
        assert_eq!(classify(&e), Verdict::JsByUrl);
    }

    #[test]
    fn javascript_content_type() {
        let e = exchange("http://x.com/bundle", Some("application/javascript; charset=utf-8"));
        assert_eq!(classify(&e), Verdict::JsByContentType);
    }

    #[test]
    fn html_content_type() {
        let e = exchange("http://x.com/page", Some("text/html; charset=utf-8"));
        assert_eq!(classify(&e), Verdict::HtmlPage);
    }

    #[test]
    fn no_response_is_not_js() {
        let e = exchange("http://x.com/page", None);
        assert_eq!(classify(&e), Verdict::NotJs);
    }

    #[test]
    fn unrelated_content_type_is_not_js() {
        let e = exchange("http://x.com/logo", Some("image/png"));
        assert_eq!(classify(&e), Verdict::NotJs);
    }

    #[test]
    fn content_type_match_is_case_insensitive() {
        let e = exchange("http://x.com/bundle", Some("Application/JavaScript"));
        assert_eq!(classify(&e), Verdict::JsByContentType);
        let p = exchange("http://x.com/page", Some("TEXT/HTML"));
        assert_eq!(classify(&p), Verdict::HtmlPage);
    }
}
