//! HAR-backed transaction source.
//!
//! Loads a HAR 1.2 capture into the exchange model so the extractor can run
//! against traffic recorded by a browser or intercepting proxy.

mod parse;

use anyhow::{Context, Result};
use std::path::Path;
use url::Url;

use crate::exchange::{Exchange, ExchangeResponse, Header, TransactionSource};
use parse::{HarEntry, HarLog};

/// Captured traffic loaded from a HAR 1.2 file.
pub struct HarSource {
    exchanges: Vec<Exchange>,
    base_override: Option<Url>,
}

impl HarSource {
    /// Loads a HAR file. `base_override` pins the scope anchor; without it
    /// the first entry's request URL anchors the run.
    pub fn load(path: &Path, base_override: Option<Url>) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read HAR file: {}", path.display()))?;
        let har: HarLog = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse HAR JSON: {}", path.display()))?;
        let exchanges = har
            .log
            .entries
            .into_iter()
            .map(exchange_from_entry)
            .collect();
        Ok(HarSource {
            exchanges,
            base_override,
        })
    }
}

fn exchange_from_entry(entry: HarEntry) -> Exchange {
    let response = entry.response.map(|r| ExchangeResponse {
        status: r.status,
        headers: r
            .headers
            .into_iter()
            .map(|h| Header {
                name: h.name,
                value: h.value,
            })
            .collect(),
        body: r.content.as_ref().and_then(|c| c.body_bytes()),
    });
    Exchange {
        url: entry.request.url,
        response,
    }
}

impl TransactionSource for HarSource {
    fn selected_base_url(&self) -> Option<Url> {
        if let Some(url) = &self.base_override {
            return Some(url.clone());
        }
        Url::parse(&self.exchanges.first()?.url).ok()
    }

    fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }
}
