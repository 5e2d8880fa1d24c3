//! Sequential bulk retrieval of an extracted URL list.

mod download;
mod filename;

pub use download::download;
pub use filename::safe_filename;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::JsgrabConfig;
use crate::error::DownloadError;
use crate::urlset::JsUrlSet;

/// Terminal outcome for one URL in a fetch batch.
#[derive(Debug)]
pub enum Outcome {
    /// Body written into the target directory under `filename`.
    Saved { filename: String, bytes: u64 },
    /// Fetch or local write failed; the batch continued past it.
    Failed(DownloadError),
}

/// Per-URL result reported by [`Fetcher::fetch_all`].
#[derive(Debug)]
pub struct DownloadResult {
    pub url: String,
    pub outcome: Outcome,
}

impl DownloadResult {
    pub fn is_saved(&self) -> bool {
        matches!(self.outcome, Outcome::Saved { .. })
    }
}

/// Downloads every URL in a set into one flat target directory.
///
/// Constructed per invocation with explicit arguments; holds no state
/// across runs beyond the directory and timeouts.
pub struct Fetcher {
    target_dir: PathBuf,
    connect_timeout: Duration,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(target_dir: &Path, config: &JsgrabConfig) -> Self {
        Fetcher {
            target_dir: target_dir.to_path_buf(),
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// Fetches each URL in the set's order, one blocking GET at a time.
    ///
    /// One URL's failure never aborts the batch. Distinct URLs may derive
    /// the same filename; the later write wins, with a warning instead of
    /// silence.
    pub fn fetch_all(&self, urls: &JsUrlSet) -> Vec<DownloadResult> {
        let mut results = Vec::with_capacity(urls.len());
        let mut seen_names: HashSet<String> = HashSet::new();
        for url in urls.iter() {
            let outcome = self.fetch_one(url, &mut seen_names);
            match &outcome {
                Outcome::Saved { filename, bytes } => {
                    tracing::info!(url, file = %filename, bytes, "saved");
                }
                Outcome::Failed(err) => {
                    tracing::warn!(url, error = %err, "download failed");
                }
            }
            results.push(DownloadResult {
                url: url.to_string(),
                outcome,
            });
        }
        results
    }

    fn fetch_one(&self, url: &str, seen_names: &mut HashSet<String>) -> Outcome {
        let body = match download(url, self.connect_timeout, self.timeout) {
            Ok(body) => body,
            Err(err) => return Outcome::Failed(err),
        };
        let filename = safe_filename(url);
        if !seen_names.insert(filename.clone()) {
            tracing::warn!(url, file = %filename, "filename collision, overwriting earlier download");
        }
        let path = self.target_dir.join(&filename);
        match std::fs::write(&path, &body) {
            Ok(()) => Outcome::Saved {
                filename,
                bytes: body.len() as u64,
            },
            Err(err) => Outcome::Failed(DownloadError::Storage(err)),
        }
    }
}
