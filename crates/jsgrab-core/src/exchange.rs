//! Captured HTTP exchange model and the transaction-source seam.

use url::{Position, Url};

/// One captured response header, name/value, capture order preserved.
#[derive(Debug, Clone)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// Response side of a captured exchange. The body may not have been captured.
#[derive(Debug, Clone)]
pub struct ExchangeResponse {
    pub status: u16,
    pub headers: Vec<Header>,
    pub body: Option<Vec<u8>>,
}

/// One captured HTTP transaction. Owned by the transaction source; the
/// extraction core only reads it.
#[derive(Debug, Clone)]
pub struct Exchange {
    /// Absolute request URL as captured.
    pub url: String,
    pub response: Option<ExchangeResponse>,
}

impl Exchange {
    /// Case-insensitive response header lookup; value is trimmed.
    /// Returns `None` when the exchange has no response.
    pub fn response_header(&self, name: &str) -> Option<&str> {
        self.response
            .as_ref()?
            .headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.trim())
    }
}

/// Provider of captured traffic. The capture mechanism (intercepting proxy,
/// HAR file, test fixture) stays behind this seam; the core never mutates it.
pub trait TransactionSource {
    /// Origin anchor for this run, if one was selected.
    fn selected_base_url(&self) -> Option<Url>;
    /// All captured exchanges, in capture order.
    fn exchanges(&self) -> &[Exchange];
}

/// Origin prefix (`scheme://host[:port]`) scoping which exchanges are
/// eligible for extraction. Containment is plain string-prefix on the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseScope(String);

impl BaseScope {
    /// Derives the scope from a URL's origin, dropping path/query/fragment.
    pub fn from_url(url: &Url) -> Self {
        BaseScope(url[..Position::BeforePath].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if `url` begins with this scope's string form.
    pub fn contains(&self, url: &str) -> bool {
        url.starts_with(&self.0)
    }
}
