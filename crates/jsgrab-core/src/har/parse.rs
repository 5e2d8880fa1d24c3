//! Minimal HAR 1.2 structures for exchange ingestion.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Deserialize;

/// Root HAR log (top-level wrapper).
#[derive(Debug, Deserialize)]
pub struct HarLog {
    pub log: HarRoot,
}

#[derive(Debug, Deserialize)]
pub struct HarRoot {
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HarEntry {
    pub request: HarRequest,
    #[serde(default)]
    pub response: Option<HarResponse>,
}

#[derive(Debug, Deserialize)]
pub struct HarRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct HarResponse {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub headers: Vec<HarHeader>,
    #[serde(default)]
    pub content: Option<HarContent>,
}

#[derive(Debug, Deserialize)]
pub struct HarHeader {
    pub name: String,
    pub value: String,
}

/// Response body as captured. Binary bodies carry `encoding: "base64"`.
#[derive(Debug, Deserialize)]
pub struct HarContent {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

impl HarContent {
    /// Decoded body bytes: base64 when flagged, UTF-8 text otherwise.
    /// Undecodable base64 degrades to an absent body rather than an error.
    pub fn body_bytes(&self) -> Option<Vec<u8>> {
        let text = self.text.as_ref()?;
        match self.encoding.as_deref() {
            Some(enc) if enc.eq_ignore_ascii_case("base64") => BASE64.decode(text.as_bytes()).ok(),
            _ => Some(text.clone().into_bytes()),
        }
    }
}
